//! Remote-first rewriting with the local brand voice pipeline as fallback.

use bv_core::types::{RewriteResult, RewriteSource};
use tracing::Instrument;
use uuid::Uuid;

use crate::chain::Gateway;
use crate::request::RewriteRequest;

/// A rewrite plus where it came from and why earlier providers were skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub result: RewriteResult,
    pub source: RewriteSource,
    pub failures: Vec<String>,
}

#[derive(Debug, Default)]
pub struct BrandRewriter {
    gateway: Gateway,
}

impl BrandRewriter {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Rewriter with no remote providers; always uses the local pipeline.
    pub fn local_only() -> Self {
        Self::default()
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    /// Rewrite `text` in the voice described by `profile`. Never fails.
    pub async fn rewrite(&self, text: &str, profile: &str, brand_name: &str) -> RewriteOutcome {
        let span = tracing::info_span!("rewrite", request_id = %Uuid::new_v4(), brand = brand_name);
        self.rewrite_inner(text, profile, brand_name).instrument(span).await
    }

    async fn rewrite_inner(&self, text: &str, profile: &str, brand_name: &str) -> RewriteOutcome {
        let request = RewriteRequest::new(text, profile, brand_name);
        let (rewritten_text, source, failures) = match self.gateway.first_success(&request).await {
            Ok(remote) => (remote.text, RewriteSource::Remote { provider: remote.provider }, Vec::new()),
            Err(failure) => {
                if !self.gateway.is_empty() {
                    tracing::warn!(reason = %failure, "all remote providers failed, using local rewrite");
                }
                (bv_voice::local_rewrite(text, profile, brand_name), RewriteSource::Local, failure.reasons())
            }
        };
        RewriteOutcome {
            result: RewriteResult {
                original_text: text.to_string(),
                rewritten_text,
                brand_name: brand_name.to_string(),
            },
            source,
            failures,
        }
    }
}
