use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    tracing::info!("🔑 Keyguard API initializing...");

    let config = ServerConfig::from_env()?;
    let router = routes::router();

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;

    tracing::info!("✅ Keyguard API listening on {}", config.bind_addr);

    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}
