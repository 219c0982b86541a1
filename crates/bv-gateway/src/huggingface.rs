//! Hugging Face Inference API text generation.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::ProviderError;
use crate::http::{build_client, join_url, post_json};
use crate::provider::RewriteProvider;
use crate::request::{clean_output, RewriteRequest};

const MAX_NEW_TOKENS: u32 = 512;
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
    name: String,
    base_url: String,
    model: String,
    api_key: String,
    client: Client,
}

impl HuggingFaceProvider {
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
impl RewriteProvider for HuggingFaceProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn attempt(&self, request: &RewriteRequest<'_>) -> Result<String, ProviderError> {
        let inputs = request.instruction_prompt();
        let payload = GenerationRequest {
            inputs: &inputs,
            parameters: GenerationParameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                return_full_text: false,
            },
        };
        let url = join_url(&self.base_url, &format!("models/{}", self.model));
        let response: GenerationResponse =
            post_json(&self.client, &url, &self.api_key, &[], &payload).await?;

        let generated = response.into_text().ok_or_else(|| {
            ProviderError::payload("response did not contain generated_text")
        })?;
        // Some deployments ignore return_full_text and echo the prompt.
        let generated = generated.strip_prefix(inputs.as_str()).unwrap_or(&generated);
        let cleaned = clean_output(generated);
        if cleaned.is_empty() {
            return Err(ProviderError::payload("generated text was empty"));
        }
        Ok(cleaned)
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    max_new_tokens: u32,
    temperature: f32,
    return_full_text: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    generated_text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GenerationResponse {
    Batch(Vec<Generation>),
    Single(Generation),
}

impl GenerationResponse {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Batch(items) => items.into_iter().find_map(|g| g.generated_text),
            Self::Single(g) => g.generated_text,
        }
    }
}
