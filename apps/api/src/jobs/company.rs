//! Company name normalization.
//!
//! Three tiers: keep the model's name when it is specific, derive one from a
//! recognizable careers-page URL, or deterministically sample a plausible
//! company for the query. Whatever the input, the output is never a generic
//! placeholder.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::jobs::hash::seed_hash;
use crate::models::job::JobQuery;

/// Vague phrases that disqualify a name, matched as lowercase substrings.
const GENERIC_PHRASES: &[&str] = &[
    "various companies",
    "various employers",
    "multiple companies",
    "multiple employers",
    "confidential employer",
    "confidential company",
    "leading company",
    "leading employer",
    "top company",
    "top employer",
    "hiring company",
    "reputable company",
    "growing company",
    "our client",
];

/// Words that are only ever placeholders when used as the whole name.
const GENERIC_EXACT: &[&str] = &["company", "employer", "organisation", "organization"];

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(n/?a|tbd|tba|none|null|unknown|not\s+specified|not\s+applicable|no\s+name|placeholder|sample|test)$",
    )
    .expect("placeholder pattern must compile")
});

/// Whether a candidate employer name is a placeholder rather than a real
/// company. Empty, too short, vague-phrase, placeholder-token, and
/// bare-word-"company" names are all rejected.
pub fn is_generic_company_name(name: &str) -> bool {
    let trimmed = name.trim();
    if trimmed.chars().count() <= 2 {
        return true;
    }
    let lower = trimmed.to_lowercase();
    if GENERIC_EXACT.iter().any(|word| lower == *word) {
        return true;
    }
    if GENERIC_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        return true;
    }
    PLACEHOLDER_RE.is_match(trimmed)
}

/// Lowercase alphanumeric-only rendering of a string, used for loose
/// substring matching inside URLs.
pub fn slug(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Job boards and search aggregators. URLs on these hosts never identify the
/// employer, so no company name can be derived from them.
const AGGREGATOR_HOSTS: &[&str] = &[
    "linkedin.com",
    "indeed.com",
    "glassdoor.com",
    "seek.com.au",
    "seek.co.nz",
    "jobstreet.com",
    "jobstreet.com.my",
    "jobstreet.com.sg",
    "prosple.com",
    "google.com",
    "ziprecruiter.com",
    "monster.com",
    "careerjet.com",
];

/// ATS hosts that carry the employer as the first URL path segment,
/// e.g. `boards.greenhouse.io/<company>/jobs/123`.
const ATS_PATH_HOSTS: &[&str] = &[
    "boards.greenhouse.io",
    "job-boards.greenhouse.io",
    "jobs.lever.co",
    "apply.workable.com",
    "jobs.ashbyhq.com",
    "jobs.smartrecruiters.com",
];

/// ATS hosts that carry the employer as the leftmost subdomain label,
/// e.g. `<company>.wd3.myworkdayjobs.com`.
const ATS_SUBDOMAIN_HOSTS: &[&str] = &[
    "myworkdayjobs.com",
    "recruitee.com",
    "breezy.hr",
    "bamboohr.com",
    "teamtailor.com",
];

/// Attempts to read the employer out of a careers-page URL. Aggregator hosts
/// never yield a name; unknown hosts yield nothing either.
pub fn derive_company_from_link(link: &str) -> Option<String> {
    let parsed = Url::parse(link).ok()?;
    let host_raw = parsed.host_str()?.to_lowercase();
    let host = host_raw.strip_prefix("www.").unwrap_or(&host_raw);

    if AGGREGATOR_HOSTS
        .iter()
        .any(|base| crate::jobs::providers::host_matches(host, base))
    {
        return None;
    }

    if ATS_PATH_HOSTS
        .iter()
        .any(|base| crate::jobs::providers::host_matches(host, base))
    {
        let segment = parsed.path_segments()?.find(|s| !s.is_empty())?;
        return humanize_slug(segment);
    }

    if ATS_SUBDOMAIN_HOSTS
        .iter()
        .any(|base| host.ends_with(&format!(".{base}")))
    {
        let label = host.split('.').next()?;
        return humanize_slug(label);
    }

    None
}

/// "acme-corp" -> "Acme Corp". Rejects segments that are still generic or
/// purely numeric after humanizing.
fn humanize_slug(segment: &str) -> Option<String> {
    let words: Vec<String> = segment
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(capitalize)
        .collect();
    if words.is_empty() {
        return None;
    }
    let name = words.join(" ");
    if is_generic_company_name(&name) || name.chars().all(|c| c.is_ascii_digit() || c == ' ') {
        return None;
    }
    Some(name)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Static keyword-to-companies table used only for fallback sampling when no
/// real employer name is available.
pub struct CompanyBucket {
    pub keywords: &'static [&'static str],
    pub companies: &'static [&'static str],
}

pub static COMPANY_BUCKETS: &[CompanyBucket] = &[
    CompanyBucket {
        keywords: &[
            "frontend",
            "front-end",
            "react",
            "vue",
            "typescript",
            "javascript",
        ],
        companies: &["Canva", "Atlassian", "Figma", "Culture Amp", "Squarespace"],
    },
    CompanyBucket {
        keywords: &["backend", "back-end", "api", "node", "golang", "java", "python", "rust"],
        companies: &["Stripe", "Shopify", "MongoDB", "Twilio", "Datadog"],
    },
    CompanyBucket {
        keywords: &["data", "analytics", "machine learning", "deep learning", "ml engineer"],
        companies: &["Databricks", "Snowflake", "Harrison.ai", "Scale AI", "Weights & Biases"],
    },
    CompanyBucket {
        keywords: &["devops", "cloud", "infrastructure", "platform engineer", "sre", "kubernetes"],
        companies: &["HashiCorp", "Cloudflare", "Buildkite", "PagerDuty", "Fastly"],
    },
    CompanyBucket {
        keywords: &["mobile", "ios", "android", "flutter", "react native"],
        companies: &["Spotify", "Airbnb", "DoorDash", "Block"],
    },
    CompanyBucket {
        keywords: &["design", "ux", "product designer"],
        companies: &["Figma", "Canva", "Intercom", "Linear"],
    },
    CompanyBucket {
        keywords: &["security", "cyber", "appsec"],
        companies: &["Okta", "CrowdStrike", "1Password", "Bugcrowd"],
    },
];

/// Sampled when no bucket's keywords match the query text.
pub static DEFAULT_COMPANIES: &[&str] = &[
    "Atlassian",
    "Canva",
    "Stripe",
    "Shopify",
    "Cloudflare",
    "Datadog",
];

/// Deterministically samples a plausible company for a query: first bucket
/// with any keyword substring match wins, indexed by the query text's hash
/// plus the caller's offset. Same query and offset, same company — always.
pub fn sample_company(query: &JobQuery, index: usize) -> &'static str {
    let text = format!("{} {}", query.title, query.query).to_lowercase();
    let companies = COMPANY_BUCKETS
        .iter()
        .find(|bucket| bucket.keywords.iter().any(|k| text.contains(k)))
        .map(|bucket| bucket.companies)
        .unwrap_or(DEFAULT_COMPANIES);
    let idx = (seed_hash(&text) as i64 + index as i64).rem_euclid(companies.len() as i64) as usize;
    companies[idx]
}

/// Three-tier company resolution: the raw name verbatim when specific, a
/// name derived from the link's URL structure, else a sampled company.
pub fn normalise_company_name(
    raw: Option<&str>,
    link: Option<&str>,
    query: &JobQuery,
    index: usize,
) -> String {
    if let Some(raw) = raw {
        let trimmed = raw.trim();
        if !trimmed.is_empty() && !is_generic_company_name(trimmed) {
            return trimmed.to_string();
        }
    }
    if let Some(link) = link {
        if let Some(derived) = derive_company_from_link(link) {
            return derived;
        }
    }
    sample_company(query, index).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(title: &str, q: &str) -> JobQuery {
        JobQuery {
            title: title.to_string(),
            query: q.to_string(),
        }
    }

    #[test]
    fn test_every_generic_phrase_is_rejected() {
        for phrase in GENERIC_PHRASES {
            assert!(is_generic_company_name(phrase), "{phrase} should be generic");
        }
        for word in GENERIC_EXACT {
            assert!(is_generic_company_name(word), "{word} should be generic");
        }
    }

    #[test]
    fn test_placeholder_tokens_are_rejected() {
        for token in ["N/A", "na", "TBD", "unknown", "Not Specified", "null"] {
            assert!(is_generic_company_name(token), "{token} should be generic");
        }
    }

    #[test]
    fn test_short_and_empty_names_are_rejected() {
        assert!(is_generic_company_name(""));
        assert!(is_generic_company_name("   "));
        assert!(is_generic_company_name("AB"));
    }

    #[test]
    fn test_specific_names_are_accepted() {
        for name in ["Canva", "Atlassian", "IBM", "Jane Street"] {
            assert!(!is_generic_company_name(name), "{name} should be specific");
        }
    }

    #[test]
    fn test_slug_strips_non_alphanumerics() {
        assert_eq!(slug("Acme Corp."), "acmecorp");
        assert_eq!(slug("1Password"), "1password");
    }

    #[test]
    fn test_derive_from_greenhouse_path() {
        let derived =
            derive_company_from_link("https://boards.greenhouse.io/acme/jobs/123").unwrap();
        assert_eq!(derived, "Acme");
    }

    #[test]
    fn test_derive_from_lever_multi_word_path() {
        let derived = derive_company_from_link("https://jobs.lever.co/acme-corp/456").unwrap();
        assert_eq!(derived, "Acme Corp");
    }

    #[test]
    fn test_derive_from_workday_subdomain() {
        let derived =
            derive_company_from_link("https://acme.wd3.myworkdayjobs.com/en-US/careers").unwrap();
        assert_eq!(derived, "Acme");
    }

    #[test]
    fn test_aggregator_hosts_never_yield_a_company() {
        for link in [
            "https://www.linkedin.com/jobs/view/12345",
            "https://au.indeed.com/viewjob?jk=abc",
            "https://www.seek.com.au/job/98765",
        ] {
            assert!(derive_company_from_link(link).is_none(), "{link}");
        }
    }

    #[test]
    fn test_unknown_host_yields_nothing() {
        assert!(derive_company_from_link("https://careers.example.com/acme").is_none());
    }

    #[test]
    fn test_unparseable_link_yields_nothing() {
        assert!(derive_company_from_link("not a url").is_none());
    }

    #[test]
    fn test_sample_company_is_deterministic() {
        let q = query("Backend Engineer", "backend engineer node");
        assert_eq!(sample_company(&q, 0), sample_company(&q, 0));
        assert_eq!(sample_company(&q, 3), sample_company(&q, 3));
    }

    #[test]
    fn test_sample_company_matches_bucket() {
        let q = query("Backend Engineer", "backend engineer node");
        let sampled = sample_company(&q, 0);
        let backend = COMPANY_BUCKETS
            .iter()
            .find(|b| b.keywords.contains(&"backend"))
            .unwrap();
        assert!(backend.companies.contains(&sampled));
    }

    #[test]
    fn test_sample_company_without_bucket_uses_default_list() {
        let q = query("Zookeeper", "zookeeper animal care");
        assert!(DEFAULT_COMPANIES.contains(&sample_company(&q, 0)));
    }

    #[test]
    fn test_normalise_keeps_specific_raw_name() {
        let q = query("SRE", "site reliability engineer");
        assert_eq!(
            normalise_company_name(Some("Canva"), None, &q, 0),
            "Canva"
        );
    }

    #[test]
    fn test_normalise_derives_when_raw_is_generic() {
        let q = query("SRE", "site reliability engineer");
        assert_eq!(
            normalise_company_name(
                Some("Various companies"),
                Some("https://boards.greenhouse.io/acme/jobs/123"),
                &q,
                0
            ),
            "Acme"
        );
    }

    #[test]
    fn test_normalise_samples_when_nothing_usable() {
        let q = query("Backend Engineer", "backend engineer node");
        let name = normalise_company_name(Some("TBD"), Some("https://www.linkedin.com/jobs/view/1"), &q, 2);
        assert!(!is_generic_company_name(&name));
    }
}
