//! HTTP plumbing shared by the provider clients.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::error::ProviderError;

const ERROR_BODY_CHARS: usize = 160;

pub fn build_client(timeout: Duration) -> Result<Client, ProviderError> {
    Client::builder().timeout(timeout).build().map_err(|error| ProviderError::Configuration {
        message: format!("failed to configure HTTP client: {error}"),
    })
}

/// POST `body` as JSON with bearer auth and decode a JSON reply.
///
/// Any non-200 status becomes [`ProviderError::Status`] with a truncated body.
pub async fn post_json<B, R>(
    client: &Client,
    url: &str,
    api_key: &str,
    headers: &[(String, String)],
    body: &B,
) -> Result<R, ProviderError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let mut request = client.post(url).bearer_auth(api_key).json(body);
    for (name, value) in headers {
        request = request.header(name, value);
    }

    let response = request.send().await.map_err(|error| ProviderError::Transport {
        message: error.to_string(),
    })?;

    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.map_or_else(
            |_| "(failed to read error response body)".to_string(),
            |content| truncate_for_message(&content, ERROR_BODY_CHARS),
        );
        return Err(ProviderError::Status { status: status.as_u16(), body });
    }

    response
        .json::<R>()
        .await
        .map_err(|error| ProviderError::payload(format!("JSON decoding failed: {error}")))
}

pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub fn truncate_for_message(message: &str, max_chars: usize) -> String {
    let mut chars = message.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
