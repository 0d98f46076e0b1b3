use axum::{extract::State, Json};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};

use crate::analyzer;
use crate::errors::AppError;
use crate::extract;
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

/// Leading slice of extracted text echoed back so the caller can show what
/// was actually analyzed.
const SNIPPET_CHAR_LIMIT: usize = 1200;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    #[serde(default)]
    pub base64_data: String,
    #[serde(default)]
    pub custom_prompt: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeResponse {
    pub resume_text_snippet: String,
    pub analysis: AnalysisResult,
}

/// POST /api/v1/analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    for (field, value) in [
        ("fileName", &req.file_name),
        ("fileType", &req.file_type),
        ("base64Data", &req.base64_data),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "Missing required field: {field}"
            )));
        }
    }

    let bytes = general_purpose::STANDARD
        .decode(req.base64_data.trim())
        .map_err(|e| AppError::Validation(format!("base64Data is not valid base64: {e}")))?;

    let text = extract::extract_text(&req.file_name, &req.file_type, &bytes)?;
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the uploaded file".to_string(),
        ));
    }

    let ai = state
        .ai
        .as_deref()
        .ok_or_else(|| AppError::Llm("AI client is not configured".to_string()))?;

    let analysis = analyzer::analyze(ai, &text, req.custom_prompt.as_deref()).await?;

    Ok(Json(AnalyzeResumeResponse {
        resume_text_snippet: snippet(&text),
        analysis,
    }))
}

fn snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= SNIPPET_CHAR_LIMIT {
        return trimmed.to_string();
    }
    let mut cut: String = trimmed.chars().take(SNIPPET_CHAR_LIMIT).collect();
    cut.push('…');
    cut
}
