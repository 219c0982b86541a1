//! Build provider clients from configuration.

use bv_core::config::{ProviderConfig, ProviderKind};
use std::time::Duration;

use crate::cohere::CohereProvider;
use crate::error::ProviderError;
use crate::huggingface::HuggingFaceProvider;
use crate::openai::OpenAiCompatibleProvider;
use crate::provider::RewriteProvider;

const OPENROUTER_TITLE: &str = "Brand Voice Rewriter";

/// Construct one provider with an already-resolved API key.
pub fn build_provider(config: &ProviderConfig, api_key: String) -> Result<Box<dyn RewriteProvider>, ProviderError> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let name = config.name.as_str();
    let provider: Box<dyn RewriteProvider> = match config.kind {
        ProviderKind::OpenaiCompatible => {
            let p = OpenAiCompatibleProvider::new(name, &config.base_url, &config.model, api_key, timeout)?;
            if name == "openrouter" {
                Box::new(p.with_header("X-Title", OPENROUTER_TITLE))
            } else {
                Box::new(p)
            }
        }
        ProviderKind::HuggingFace => {
            Box::new(HuggingFaceProvider::new(name, &config.base_url, &config.model, api_key, timeout)?)
        }
        ProviderKind::Cohere => {
            Box::new(CohereProvider::new(name, &config.base_url, &config.model, api_key, timeout)?)
        }
    };
    Ok(provider)
}

/// Providers in configuration order. Disabled entries and entries whose API
/// key `lookup` cannot resolve are skipped.
pub fn providers_from_config(
    configs: &[ProviderConfig],
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<Box<dyn RewriteProvider>> {
    let mut providers = Vec::new();
    for config in configs {
        if !config.enabled {
            tracing::debug!(provider = %config.name, "provider disabled");
            continue;
        }
        let Some(api_key) = config.api_key_with(&lookup) else {
            tracing::info!(provider = %config.name, env = %config.api_key_env, "no API key, provider skipped");
            continue;
        };
        match build_provider(config, api_key) {
            Ok(provider) => providers.push(provider),
            Err(err) => tracing::warn!(provider = %config.name, error = %err, "provider unavailable"),
        }
    }
    providers
}
