//! The deterministic offline catalogue.
//!
//! When the model is unconfigured, fails, or returns nothing usable, every
//! query still yields several postings — one per offset, spread across the
//! provider registry — so the caller always has pagination-worthy content.

use crate::jobs::company::sample_company;
use crate::jobs::hash::seed_hash;
use crate::jobs::providers::{select_provider, LinkParams, PROVIDERS};
use crate::models::job::{JobPosting, JobQuery};

/// Floor on rows generated per query.
const MIN_POSTINGS_PER_QUERY: usize = 5;

/// Generates the fallback posting set. Pure: the same
/// `(queries, location, remote, now_ms)` always produce the same list;
/// only the `now_ms` suffix in ids varies between real calls.
pub fn fallback_postings(
    queries: &[JobQuery],
    location: Option<&str>,
    remote: bool,
    now_ms: i64,
) -> Vec<JobPosting> {
    let per_query = PROVIDERS.len().max(MIN_POSTINGS_PER_QUERY);
    let mut postings = Vec::with_capacity(queries.len() * per_query);

    for (query_index, query) in queries.iter().enumerate() {
        for offset in 0..per_query {
            let company = sample_company(query, query_index + offset);
            let provider = select_provider(seed_hash(&format!(
                "{}:{}:{}:{}",
                query.title, query.query, query_index, offset
            )));

            let display_location = if remote {
                "Remote".to_string()
            } else {
                location
                    .map(str::to_string)
                    .unwrap_or_else(|| "Flexible location".to_string())
            };
            let description = if remote {
                format!(
                    "{company} is hiring for roles matching \"{}\". This position supports remote work.",
                    query.query
                )
            } else {
                format!(
                    "{company} is hiring for roles matching \"{}\" ({display_location}).",
                    query.query
                )
            };

            let params = LinkParams {
                query: &query.query,
                company: Some(company),
                location: if remote { None } else { location },
                remote,
            };

            postings.push(JobPosting {
                id: format!("fallback-{now_ms}-{query_index}-{offset}"),
                title: format!("{} at {}", query.title, company),
                company: company.to_string(),
                location: Some(display_location),
                salary: None,
                description: Some(description),
                posted_at: None,
                url: (provider.build)(&params),
                source: provider.name.to_string(),
            });
        }
    }

    postings
}
