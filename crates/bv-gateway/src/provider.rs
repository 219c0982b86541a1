use async_trait::async_trait;

use crate::error::ProviderError;
use crate::request::RewriteRequest;

/// One remote rewrite capability.
#[async_trait]
pub trait RewriteProvider: Send + Sync + std::fmt::Debug {
    /// Stable name used in logs and API responses.
    fn name(&self) -> &str;

    /// Ask the provider for a rewrite of `request.text`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] for transport, status or payload failures.
    async fn attempt(&self, request: &RewriteRequest<'_>) -> Result<String, ProviderError>;
}
