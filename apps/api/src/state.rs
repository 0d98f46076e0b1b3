use std::sync::Arc;

use crate::ai_client::CompletionClient;
use crate::config::Config;
use crate::jobs::JobSynthesizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Absent when no API key is configured. Resume analysis then fails at
    /// the boundary; job search runs entirely on the fallback catalogue.
    pub ai: Option<Arc<dyn CompletionClient>>,
    pub jobs: JobSynthesizer,
    /// Kept for handlers that need runtime configuration; currently only
    /// startup reads it.
    #[allow(dead_code)]
    pub config: Config,
}
