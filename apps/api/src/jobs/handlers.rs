use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::job::{JobPosting, JobQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    #[serde(default)]
    pub queries: Vec<JobQuery>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub jobs: Vec<JobPosting>,
}

/// POST /api/v1/jobs/search
///
/// Only an empty query list is an error; model failures degrade silently to
/// the fallback catalogue inside the engine.
pub async fn handle_search_jobs(
    State(state): State<AppState>,
    Json(req): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    if req.queries.is_empty() {
        return Err(AppError::Validation(
            "queries must be a non-empty list".to_string(),
        ));
    }

    let location = req
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty());

    let jobs = state
        .jobs
        .synthesize(&req.queries, location, req.remote.unwrap_or(false))
        .await;

    Ok(Json(JobSearchResponse { jobs }))
}
