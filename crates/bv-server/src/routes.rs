use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::{get, post},
    Json, Router,
};
use bv_core::types::{BrandCharacteristics, BrandSummary, RewriteResult, RewriteSource};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn brand_routes() -> Router<AppState> {
    Router::new()
        .route("/api/brands", get(list_brands))
        .route("/api/brands/reload", post(reload_brands))
        .route("/api/brands/{name}", get(get_brand))
}

pub fn rewrite_routes() -> Router<AppState> {
    Router::new().route("/api/rewrite", post(rewrite))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "brands": state.profiles.len(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

async fn list_brands(State(state): State<AppState>) -> Json<Vec<BrandSummary>> {
    Json(state.profiles.summaries())
}

#[derive(Debug, Serialize)]
struct BrandDetail {
    name: String,
    preview: String,
    characteristics: BrandCharacteristics,
}

async fn get_brand(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BrandDetail>, ApiError> {
    let profile = state.profiles.require(&name)?;
    Ok(Json(BrandDetail {
        name: profile.name.clone(),
        preview: profile.preview(),
        characteristics: bv_voice::extract_characteristics(&profile.content),
    }))
}

#[derive(Debug, Serialize)]
struct ReloadResponse {
    loaded: usize,
    brands: Vec<String>,
    loaded_at: Option<DateTime<Utc>>,
}

async fn reload_brands(State(state): State<AppState>) -> Result<Json<ReloadResponse>, ApiError> {
    let store = state.profiles.clone();
    let loaded = tokio::task::spawn_blocking(move || store.reload())
        .await
        .map_err(|e| ApiError::internal(format!("profile reload failed: {e}")))?;
    Ok(Json(ReloadResponse {
        loaded,
        brands: state.profiles.names(),
        loaded_at: state.profiles.loaded_at(),
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RewriteBody {
    text: Option<String>,
    brand_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RewriteResponse {
    #[serde(flatten)]
    result: RewriteResult,
    source: RewriteSource,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fallback_reasons: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

async fn rewrite(
    State(state): State<AppState>,
    body: Result<Json<RewriteBody>, JsonRejection>,
) -> Result<Json<RewriteResponse>, ApiError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected rewrite body");
            RewriteBody::default()
        }
    };
    let (Some(text), Some(brand_name)) = (non_blank(body.text), non_blank(body.brand_name)) else {
        return Err(ApiError::bad_request("Text and brand name are required"));
    };
    let profile = state.profiles.require(&brand_name)?;

    let outcome = state.rewriter.rewrite(&text, &profile.content, &brand_name).await;
    Ok(Json(RewriteResponse {
        result: outcome.result,
        source: outcome.source,
        fallback_reasons: outcome.failures,
    }))
}
