use bv_core::{BrandVoiceConfig, ProfileStore};
use bv_gateway::{providers_from_config, BrandRewriter, Gateway};
use bv_server::{app_with_state, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BrandVoiceConfig::load()?;
    let profiles = ProfileStore::open(config.profiles.dir.clone());
    tracing::info!(brands = ?profiles.names(), dir = %config.profiles.dir.display(), "available brands");

    let providers = providers_from_config(&config.providers, |key| std::env::var(key).ok());
    let gateway = Gateway::new(providers).with_min_length(config.rewrite.min_length);
    if gateway.is_empty() {
        tracing::warn!("no remote providers configured, rewrites will use the local brand voice pipeline");
    } else {
        tracing::info!(providers = ?gateway.provider_names(), "remote providers enabled");
    }

    let state = AppState::new(profiles, BrandRewriter::new(gateway));
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server running");

    axum::serve(listener, app_with_state(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutting down");
}
