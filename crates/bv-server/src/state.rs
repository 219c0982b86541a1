//! Application state shared across all handlers.

use bv_core::ProfileStore;
use bv_gateway::BrandRewriter;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileStore,
    pub rewriter: Arc<BrandRewriter>,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(profiles: ProfileStore, rewriter: BrandRewriter) -> Self {
        Self { profiles, rewriter: Arc::new(rewriter), start_time: Instant::now() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ProfileStore::new(), BrandRewriter::local_only())
    }
}
