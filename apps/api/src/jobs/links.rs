//! Link validation and repair.
//!
//! Model-suggested links are kept when they plausibly match the normalized
//! company, rebuilt when they point at the right board for the wrong search,
//! and replaced with a deterministic board link when unusable.

use url::Url;

use crate::jobs::company::slug;
use crate::jobs::hash::seed_hash;
use crate::jobs::providers::{provider_for_host, select_provider, LinkParams};
use crate::models::job::JobQuery;

/// Source label for links pointing directly at an employer's own site.
const DIRECT_SOURCE: &str = "Company site";

/// A validated link plus the label of the board (or site) that backs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub url: String,
    pub source: String,
}

/// Guarantees a usable `https://` link for a posting.
///
/// 1. A deterministic board link is computed first from the fallback query,
///    company, and index.
/// 2. Missing or non-https raw links resolve to that fallback.
/// 3. A raw link on a known board is kept when it mentions the company slug,
///    rebuilt with that board's builder when it does not (right board, wrong
///    search).
/// 4. A raw link on an unknown host is accepted: with the company slug it is
///    a direct employer link, without it only its source label is corrected
///    to the fallback board's. No liveness check is made — acceptance is a
///    loose substring guarantee only.
/// 5. Unparseable URLs resolve to the fallback.
pub fn ensure_company_link(
    raw_link: Option<&str>,
    company: &str,
    fallback_query: &JobQuery,
    location: Option<&str>,
    remote: bool,
    index: usize,
) -> ResolvedLink {
    let seed = seed_hash(&format!(
        "{}:{}:{}:{}",
        fallback_query.title, fallback_query.query, company, index
    ));
    let provider = select_provider(seed);
    let params = LinkParams {
        query: &fallback_query.query,
        company: Some(company),
        location,
        remote,
    };
    let fallback = ResolvedLink {
        url: (provider.build)(&params),
        source: provider.name.to_string(),
    };

    let Some(raw) = raw_link else {
        return fallback;
    };
    if !raw.starts_with("https://") {
        return fallback;
    }
    let Ok(parsed) = Url::parse(raw) else {
        return fallback;
    };
    let Some(host) = parsed.host_str() else {
        return fallback;
    };
    let host_lower = host.to_lowercase();
    let host = host_lower.strip_prefix("www.").unwrap_or(&host_lower);

    let company_slug = slug(company);
    let mentions_company = !company_slug.is_empty() && raw.to_lowercase().contains(&company_slug);

    match provider_for_host(host) {
        Some(board) if mentions_company => ResolvedLink {
            url: raw.to_string(),
            source: board.name.to_string(),
        },
        // Right board, wrong search — rebuild so the company and query match.
        Some(board) => ResolvedLink {
            url: (board.build)(&params),
            source: board.name.to_string(),
        },
        None if mentions_company => ResolvedLink {
            url: raw.to_string(),
            source: DIRECT_SOURCE.to_string(),
        },
        None => ResolvedLink {
            url: raw.to_string(),
            source: fallback.source,
        },
    }
}
