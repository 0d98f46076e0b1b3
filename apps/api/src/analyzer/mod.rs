//! Resume Analyzer — turns extracted resume text into a typed career
//! analysis via the AI client.
//!
//! Unlike job synthesis there is no meaningful fallback for "what does this
//! resume say", so model failures propagate to the boundary.

pub mod handlers;
pub mod prompts;

use serde_json::Value;

use crate::ai_client::coerce;
use crate::ai_client::parse::parse_embedded_json;
use crate::ai_client::prompts::JSON_ONLY_SYSTEM;
use crate::ai_client::CompletionClient;
use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;

/// Character budget for resume text embedded in the prompt. A context-window
/// safeguard, not a content-quality decision.
const RESUME_CHAR_BUDGET: usize = 8000;
const TRUNCATION_MARKER: &str = "…";

pub async fn analyze(
    ai: &dyn CompletionClient,
    resume_text: &str,
    custom_prompt: Option<&str>,
) -> Result<AnalysisResult, AppError> {
    let prompt = prompts::build_analysis_prompt(&truncate_resume(resume_text), custom_prompt);
    let text = ai
        .complete(&prompt, JSON_ONLY_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;
    let parsed = parse_embedded_json(&text)
        .map_err(|e| AppError::Llm(format!("Resume analysis failed: {e}")))?;
    Ok(coerce_analysis(&parsed))
}

fn truncate_resume(text: &str) -> String {
    if text.chars().count() <= RESUME_CHAR_BUDGET {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(RESUME_CHAR_BUDGET).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

/// Field-by-field coercion: a missing or wrong-typed optional field becomes
/// an empty container, never an error.
fn coerce_analysis(parsed: &Value) -> AnalysisResult {
    AnalysisResult {
        summary: coerce::string_or(parsed, "summary", ""),
        keywords: coerce::string_list(parsed, "keywords"),
        strengths: coerce::string_list(parsed, "strengths"),
        next_steps: coerce::string_list(parsed, "nextSteps"),
        job_queries: coerce::job_query_list(parsed, "jobQueries"),
    }
}
