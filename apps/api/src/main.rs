mod config;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::LlmExtractor;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::ScoringEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing or malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting ATS engine v{}", env!("CARGO_PKG_VERSION"));

    // The model client is owned by the extractor; nothing else talks to the API.
    let llm = LlmClient::new(config.anthropic_api_key.clone(), config.llm_max_retries)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    let extractor = Arc::new(LlmExtractor::new(llm));

    let fit_scorer = Arc::new(ScoringEngine::new(config.scoring));
    info!(
        "Scoring scheme: {} (fuzzy threshold {}, substring cutoff {})",
        config.scoring.scheme, config.scoring.matcher.threshold, config.scoring.matcher.min_substring_len
    );

    let state = AppState {
        extractor,
        fit_scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
