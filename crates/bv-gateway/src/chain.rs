//! First-success evaluation over an ordered provider list.

use std::fmt;

use crate::error::ProviderError;
use crate::provider::RewriteProvider;
use crate::request::{clean_output, RewriteRequest};

/// Remote results shorter than this many characters are discarded.
pub const MIN_REWRITE_LEN: usize = 10;

/// Text produced by a provider, with that provider's name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteRewrite {
    pub provider: String,
    pub text: String,
}

/// Every provider failed; reasons are in try order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatewayFailure {
    pub failures: Vec<(String, ProviderError)>,
}

impl GatewayFailure {
    pub fn reasons(&self) -> Vec<String> {
        self.failures.iter().map(|(name, err)| format!("{name}: {err}")).collect()
    }
}

impl fmt::Display for GatewayFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failures.is_empty() {
            return f.write_str("no remote providers configured");
        }
        f.write_str(&self.reasons().join("; "))
    }
}

impl std::error::Error for GatewayFailure {}

/// Reject output that is too short or just echoes the input.
pub fn check_result(input: &str, candidate: &str, min_len: usize) -> Result<String, ProviderError> {
    let cleaned = clean_output(candidate);
    if cleaned.chars().count() < min_len {
        return Err(ProviderError::degenerate(format!("shorter than {min_len} characters")));
    }
    if cleaned == input.trim() {
        return Err(ProviderError::degenerate("identical to input"));
    }
    Ok(cleaned)
}

/// Try each provider in order and return the first usable rewrite.
pub async fn first_success<P>(
    providers: &[P],
    request: &RewriteRequest<'_>,
    min_len: usize,
) -> Result<RemoteRewrite, GatewayFailure>
where
    P: AsRef<dyn RewriteProvider>,
{
    let mut failure = GatewayFailure::default();
    for provider in providers {
        let provider = provider.as_ref();
        let outcome = provider
            .attempt(request)
            .await
            .and_then(|text| check_result(request.text, &text, min_len));
        match outcome {
            Ok(text) => {
                tracing::info!(provider = provider.name(), "remote rewrite succeeded");
                return Ok(RemoteRewrite { provider: provider.name().to_string(), text });
            }
            Err(err) => {
                tracing::warn!(provider = provider.name(), error = %err, "remote rewrite failed");
                failure.failures.push((provider.name().to_string(), err));
            }
        }
    }
    Err(failure)
}

/// Configured provider list plus the degenerate-length threshold.
#[derive(Debug)]
pub struct Gateway {
    providers: Vec<Box<dyn RewriteProvider>>,
    min_length: usize,
}

impl Gateway {
    pub fn new(providers: Vec<Box<dyn RewriteProvider>>) -> Self {
        Self { providers, min_length: MIN_REWRITE_LEN }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn push(&mut self, provider: Box<dyn RewriteProvider>) {
        self.providers.push(provider);
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub async fn first_success(&self, request: &RewriteRequest<'_>) -> Result<RemoteRewrite, GatewayFailure> {
        first_success(&self.providers, request, self.min_length).await
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
