//! Job synthesis engine.
//!
//! Transforms analyzer job queries plus location/remote preferences into a
//! validated posting list. Model suggestions are normalized, repaired, and
//! filtered; every failure on the model path converges on the deterministic
//! fallback catalogue, so callers always receive a usable list.

pub mod company;
pub mod fallback;
pub mod handlers;
pub mod hash;
pub mod links;
pub mod prompts;
pub mod providers;

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::warn;

use crate::ai_client::coerce;
use crate::ai_client::parse::parse_embedded_json;
use crate::ai_client::prompts::JSON_ONLY_SYSTEM;
use crate::ai_client::{AiError, CompletionClient};
use crate::jobs::links::ensure_company_link;
use crate::models::job::{JobPosting, JobQuery};

/// The job synthesis engine. Holds the optional AI client handle injected at
/// startup; no global state, no per-call configuration reads.
#[derive(Clone)]
pub struct JobSynthesizer {
    ai: Option<Arc<dyn CompletionClient>>,
}

impl JobSynthesizer {
    pub fn new(ai: Option<Arc<dyn CompletionClient>>) -> Self {
        Self { ai }
    }

    /// Produces the posting list for a batch of queries.
    ///
    /// Never fails: an unconfigured client, a failed call, unparseable text,
    /// or an empty suggestion set all degrade to the fallback catalogue.
    pub async fn synthesize(
        &self,
        queries: &[JobQuery],
        location: Option<&str>,
        remote: bool,
    ) -> Vec<JobPosting> {
        if queries.is_empty() {
            return Vec::new();
        }
        let now_ms = Utc::now().timestamp_millis();

        let Some(ai) = &self.ai else {
            return fallback::fallback_postings(queries, location, remote, now_ms);
        };

        match ai_postings(ai.as_ref(), queries, location, remote, now_ms).await {
            Ok(postings) if !postings.is_empty() => postings,
            Ok(_) => {
                warn!("model returned no usable postings; using fallback catalogue");
                fallback::fallback_postings(queries, location, remote, now_ms)
            }
            Err(e) => {
                warn!("job suggestion call failed ({e}); using fallback catalogue");
                fallback::fallback_postings(queries, location, remote, now_ms)
            }
        }
    }
}

async fn ai_postings(
    ai: &dyn CompletionClient,
    queries: &[JobQuery],
    location: Option<&str>,
    remote: bool,
    now_ms: i64,
) -> Result<Vec<JobPosting>, AiError> {
    let prompt = prompts::build_job_search_prompt(queries, location, remote);
    let text = ai.complete(&prompt, JSON_ONLY_SYSTEM).await?;
    let parsed = parse_embedded_json(&text)?;

    let raw_jobs = parsed
        .get("jobs")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Ok(raw_jobs
        .iter()
        .enumerate()
        .map(|(index, raw)| assemble_posting(raw, index, queries, location, remote, now_ms))
        .filter(|posting| !posting.url.is_empty())
        .collect())
}

/// Builds one posting from a raw model-suggested object, applying the
/// default chain for every field. `queries` must be non-empty.
fn assemble_posting(
    raw: &Value,
    index: usize,
    queries: &[JobQuery],
    location: Option<&str>,
    remote: bool,
    now_ms: i64,
) -> JobPosting {
    let fallback_query = &queries[index % queries.len()];

    let raw_link = coerce::opt_non_empty_string(raw, "link")
        .or_else(|| coerce::opt_non_empty_string(raw, "url"));
    let raw_company = coerce::opt_string(raw, "company");

    let company = company::normalise_company_name(
        raw_company.as_deref(),
        raw_link.as_deref(),
        fallback_query,
        index,
    );

    let display_location = coerce::opt_non_empty_string(raw, "location")
        .or_else(|| remote.then(|| "Remote".to_string()))
        .or_else(|| location.map(str::to_string));

    let link = ensure_company_link(
        raw_link.as_deref(),
        &company,
        fallback_query,
        location,
        remote,
        index,
    );

    JobPosting {
        id: coerce::string_or(raw, "id", &format!("ai-{now_ms}-{index}")),
        title: coerce::string_or(raw, "title", &fallback_query.title),
        company,
        location: display_location,
        salary: coerce::opt_non_empty_string(raw, "salary"),
        description: coerce::opt_non_empty_string(raw, "description").or_else(|| {
            Some(format!(
                "A role matching your \"{}\" search.",
                fallback_query.title
            ))
        }),
        posted_at: coerce::opt_non_empty_string(raw, "postedAt"),
        url: link.url,
        source: link.source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::company::is_generic_company_name;
    use async_trait::async_trait;
    use serde_json::json;

    /// Mock client returning a fixed completion.
    struct StaticClient(String);

    #[async_trait]
    impl CompletionClient for StaticClient {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, AiError> {
            Ok(self.0.clone())
        }
    }

    /// Mock client that always fails.
    struct FailingClient;

    #[async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _prompt: &str, _system: &str) -> Result<String, AiError> {
            Err(AiError::EmptyResponse)
        }
    }

    fn queries() -> Vec<JobQuery> {
        vec![JobQuery {
            title: "Backend Engineer".to_string(),
            query: "backend engineer node".to_string(),
        }]
    }

    fn synthesizer_with(text: &str) -> JobSynthesizer {
        JobSynthesizer::new(Some(Arc::new(StaticClient(text.to_string()))))
    }

    #[tokio::test]
    async fn test_unconfigured_client_uses_fallback() {
        let engine = JobSynthesizer::new(None);
        let jobs = engine.synthesize(&queries(), Some("Berlin"), false).await;
        assert!(jobs.len() >= 5);
        for job in &jobs {
            assert_eq!(job.location.as_deref(), Some("Berlin"));
            assert!(!is_generic_company_name(&job.company));
            assert!(job.url.starts_with("https://"));
        }
    }

    #[tokio::test]
    async fn test_failing_client_uses_fallback() {
        let engine = JobSynthesizer::new(Some(Arc::new(FailingClient)));
        let jobs = engine.synthesize(&queries(), None, false).await;
        assert!(!jobs.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_completion_uses_fallback() {
        let engine = synthesizer_with("Sure! Here's the JSON: ```{not valid json```");
        let jobs = engine.synthesize(&queries(), None, false).await;
        assert!(!jobs.is_empty());
        assert!(jobs.iter().all(|j| j.url.starts_with("https://")));
    }

    #[tokio::test]
    async fn test_empty_suggestion_list_uses_fallback() {
        let engine = synthesizer_with(r#"{"jobs":[]}"#);
        let jobs = engine.synthesize(&queries(), None, false).await;
        assert!(!jobs.is_empty());
    }

    #[tokio::test]
    async fn test_model_path_normalizes_postings() {
        let completion = json!({
            "jobs": [{
                "title": "SRE",
                "link": "https://boards.greenhouse.io/acme/jobs/123"
            }]
        })
        .to_string();
        let engine = synthesizer_with(&completion);
        let jobs = engine.synthesize(&queries(), None, false).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company, "Acme");
        assert_eq!(jobs[0].title, "SRE");
        assert_eq!(jobs[0].url, "https://boards.greenhouse.io/acme/jobs/123");
        assert_eq!(jobs[0].source, "Company site");
    }

    #[tokio::test]
    async fn test_empty_queries_yield_empty_list() {
        let engine = JobSynthesizer::new(None);
        let jobs = engine.synthesize(&[], Some("Berlin"), false).await;
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_assemble_defaults_for_bare_object() {
        let raw = json!({});
        let posting = assemble_posting(&raw, 0, &queries(), Some("Berlin"), false, 1700000000000);
        assert_eq!(posting.id, "ai-1700000000000-0");
        assert_eq!(posting.title, "Backend Engineer");
        assert_eq!(posting.location.as_deref(), Some("Berlin"));
        assert!(!is_generic_company_name(&posting.company));
        assert!(posting.url.starts_with("https://"));
        assert!(posting
            .description
            .as_deref()
            .unwrap()
            .contains("Backend Engineer"));
    }

    #[test]
    fn test_assemble_remote_location_default() {
        let raw = json!({});
        let posting = assemble_posting(&raw, 0, &queries(), None, true, 0);
        assert_eq!(posting.location.as_deref(), Some("Remote"));
    }

    #[test]
    fn test_assemble_keeps_model_fields() {
        let raw = json!({
            "id": "posting-7",
            "title": "Staff Engineer",
            "company": "Canva",
            "location": "Sydney",
            "salary": "$180k-$220k",
            "description": "Ship the editor platform.",
            "postedAt": "2 days ago",
            "link": "https://careers.canva.com/jobs/staff-engineer"
        });
        let posting = assemble_posting(&raw, 0, &queries(), None, false, 0);
        assert_eq!(posting.id, "posting-7");
        assert_eq!(posting.company, "Canva");
        assert_eq!(posting.salary.as_deref(), Some("$180k-$220k"));
        assert_eq!(posting.posted_at.as_deref(), Some("2 days ago"));
        assert_eq!(posting.source, "Company site");
        assert_eq!(posting.url, "https://careers.canva.com/jobs/staff-engineer");
    }

    #[test]
    fn test_assemble_wraps_index_over_queries() {
        let many = vec![
            JobQuery {
                title: "Backend Engineer".to_string(),
                query: "backend engineer node".to_string(),
            },
            JobQuery {
                title: "Platform Engineer".to_string(),
                query: "platform engineer kubernetes".to_string(),
            },
        ];
        let posting = assemble_posting(&json!({}), 3, &many, None, false, 0);
        assert_eq!(posting.title, "Platform Engineer");
    }
}
