pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analyzer;
use crate::jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/analyze-resume",
            post(analyzer::handlers::handle_analyze_resume),
        )
        .route(
            "/api/v1/jobs/search",
            post(jobs::handlers::handle_search_jobs),
        )
        .with_state(state)
}
