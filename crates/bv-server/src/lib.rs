//! Brand voice HTTP API server (Axum).
//!
//! Provides brand listing, explicit profile reload, brand rule inspection and
//! the rewrite endpoint.

pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Build the application router with an empty profile store and local-only rewriting.
pub fn app() -> Router {
    app_with_state(AppState::default())
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::brand_routes())
        .merge(routes::rewrite_routes())
        .with_state(state)
}
