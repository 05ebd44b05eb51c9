//! word-analyzer — HTTP server entry point.
//!
//! See [`word_analyzer::config`] for the environment variables it reads.

use anyhow::Context;
use tokio::net::TcpListener;
use word_analyzer::{build_router, create_llm_client, AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,word_analyzer=debug,tower_http=debug".into()),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::debug!(?config, "Loaded configuration");

    let llm = create_llm_client(&config)?;
    let app = build_router(AppState::new(llm));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;
    tracing::info!("word-analyzer listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
