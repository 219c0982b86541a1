//! Cohere chat API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ProviderError;
use crate::http::{build_client, join_url, post_json};
use crate::provider::RewriteProvider;
use crate::request::{clean_output, RewriteRequest};

const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct CohereProvider {
    name: String,
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl CohereProvider {
    pub fn new(
        name: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        Ok(Self {
            name: name.into(),
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client: build_client(timeout)?,
        })
    }
}

#[async_trait]
impl RewriteProvider for CohereProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn attempt(&self, request: &RewriteRequest<'_>) -> Result<String, ProviderError> {
        let payload = CohereChatRequest {
            model: &self.model,
            message: request.text,
            preamble: request.system_prompt(),
            temperature: TEMPERATURE,
        };
        let url = join_url(&self.base_url, "v1/chat");
        let response: CohereChatResponse =
            post_json(&self.client, &url, &self.api_key, &[], &payload).await?;

        response
            .text
            .as_deref()
            .map(clean_output)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| ProviderError::payload("response did not contain text"))
    }
}

#[derive(Debug, Serialize)]
struct CohereChatRequest<'a> {
    model: &'a str,
    message: &'a str,
    preamble: String,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CohereChatResponse {
    text: Option<String>,
}
