mod ai_client;
mod analyzer;
mod config;
mod errors;
mod extract;
mod jobs;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ai_client::{AiClient, CompletionClient};
use crate::config::Config;
use crate::jobs::JobSynthesizer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; everything downstream takes it by value
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Construct the AI client handle once; handlers receive it, never the env
    let ai: Option<Arc<dyn CompletionClient>> = match &config.ai_api_key {
        Some(key) => {
            info!("AI client initialized (model: {})", config.ai_model);
            Some(Arc::new(AiClient::new(key.clone(), config.ai_model.clone())))
        }
        None => {
            warn!("No AI API key configured; job search will serve the deterministic fallback catalogue");
            None
        }
    };

    let jobs = JobSynthesizer::new(ai.clone());

    let state = AppState {
        ai,
        jobs,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer(&config.allowed_origins)?);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Builds the CORS layer from the comma-separated `ALLOWED_ORIGINS` value.
/// `*` (the default) allows any origin.
fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::permissive());
    }
    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}
