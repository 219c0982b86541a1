//! Remote rewrite gateway: ordered LLM providers with a local fallback.
//!
//! Providers are tried in configuration order; the first non-degenerate
//! result wins. When every provider fails the brand voice pipeline from
//! `bv-voice` produces the text instead.

pub mod chain;
pub mod cohere;
pub mod error;
pub mod http;
pub mod huggingface;
pub mod openai;
pub mod provider;
pub mod registry;
pub mod request;
pub mod rewriter;

pub use chain::{first_success, Gateway, GatewayFailure, RemoteRewrite};
pub use error::ProviderError;
pub use provider::RewriteProvider;
pub use registry::providers_from_config;
pub use request::RewriteRequest;
pub use rewriter::{BrandRewriter, RewriteOutcome};
