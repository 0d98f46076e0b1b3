use serde::{Deserialize, Serialize};

use crate::models::job::JobQuery;

/// Typed career analysis produced from a resume.
///
/// Every list field is coerced to empty when the model omits or mistypes it;
/// only a completely unusable model response is an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub next_steps: Vec<String>,
    pub job_queries: Vec<JobQuery>,
}
