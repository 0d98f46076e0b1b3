//! The fixed set of job-board integrations.
//!
//! Each provider carries its recognized hostnames and a deterministic URL
//! builder. The registry is immutable, process-wide configuration; nothing
//! mutates it after startup.

use url::form_urlencoded;

/// Inputs to a provider's URL builder. All builders are pure: the same
/// params always produce the same URL.
pub struct LinkParams<'a> {
    pub query: &'a str,
    pub company: Option<&'a str>,
    pub location: Option<&'a str>,
    pub remote: bool,
}

pub struct SearchProvider {
    pub name: &'static str,
    /// Hostnames recognized as this board, matched on the host itself or any
    /// subdomain of it.
    pub hosts: &'static [&'static str],
    pub build: fn(&LinkParams) -> String,
}

pub static PROVIDERS: &[SearchProvider] = &[
    SearchProvider {
        name: "LinkedIn",
        hosts: &["linkedin.com"],
        build: build_linkedin,
    },
    SearchProvider {
        name: "Indeed",
        hosts: &["indeed.com"],
        build: build_indeed,
    },
    SearchProvider {
        name: "Glassdoor",
        hosts: &["glassdoor.com"],
        build: build_glassdoor,
    },
    SearchProvider {
        name: "SEEK",
        hosts: &["seek.com.au", "seek.co.nz"],
        build: build_seek,
    },
    SearchProvider {
        name: "JobStreet",
        hosts: &["jobstreet.com", "jobstreet.com.my", "jobstreet.com.sg"],
        build: build_jobstreet,
    },
    SearchProvider {
        name: "Prosple",
        hosts: &["prosple.com"],
        build: build_prosple,
    },
];

/// Picks a provider deterministically from an integer seed.
/// Pure function of `seed mod PROVIDERS.len()`.
pub fn select_provider(seed: i32) -> &'static SearchProvider {
    &PROVIDERS[seed.unsigned_abs() as usize % PROVIDERS.len()]
}

/// Finds the provider owning a hostname, if any. Expects a lowercased host
/// with any leading `www.` already stripped.
pub fn provider_for_host(host: &str) -> Option<&'static SearchProvider> {
    PROVIDERS
        .iter()
        .find(|p| p.hosts.iter().any(|h| host_matches(host, h)))
}

pub fn host_matches(host: &str, base: &str) -> bool {
    host == base || host.ends_with(&format!(".{base}"))
}

fn encode(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}

/// Search keywords: the query phrase, with the company appended when known
/// so rebuilt links stay tied to the normalized employer.
fn keywords(p: &LinkParams) -> String {
    match p.company {
        Some(company) => format!("{} {}", p.query, company),
        None => p.query.to_string(),
    }
}

/// Lowercase, alphanumeric runs joined by dashes — for boards with slug
/// paths rather than query strings.
fn kebab(s: &str) -> String {
    s.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn build_linkedin(p: &LinkParams) -> String {
    let mut url = format!(
        "https://www.linkedin.com/jobs/search/?keywords={}",
        encode(&keywords(p))
    );
    if p.remote {
        url.push_str("&f_WT=2");
    } else if let Some(location) = p.location {
        url.push_str(&format!("&location={}", encode(location)));
    }
    url
}

fn build_indeed(p: &LinkParams) -> String {
    let mut url = format!("https://www.indeed.com/jobs?q={}", encode(&keywords(p)));
    let location = if p.remote { Some("Remote") } else { p.location };
    if let Some(location) = location {
        url.push_str(&format!("&l={}", encode(location)));
    }
    url
}

fn build_glassdoor(p: &LinkParams) -> String {
    let mut url = format!(
        "https://www.glassdoor.com/Job/jobs.htm?sc.keyword={}",
        encode(&keywords(p))
    );
    if p.remote {
        url.push_str("&remoteWorkType=1");
    } else if let Some(location) = p.location {
        url.push_str(&format!("&locKeyword={}", encode(location)));
    }
    url
}

fn build_seek(p: &LinkParams) -> String {
    let mut url = format!("https://www.seek.com.au/{}-jobs", kebab(&keywords(p)));
    if p.remote {
        url.push_str("?workarrangement=2");
    } else if let Some(location) = p.location {
        url.push_str(&format!("/in-{}", kebab(location)));
    }
    url
}

fn build_jobstreet(p: &LinkParams) -> String {
    let mut url = format!(
        "https://www.jobstreet.com/en/job-search/{}-jobs/",
        kebab(&keywords(p))
    );
    if p.remote {
        url.push_str("?workArrangement=remote");
    }
    url
}

fn build_prosple(p: &LinkParams) -> String {
    let mut url = format!(
        "https://au.prosple.com/search-jobs?keywords={}",
        encode(&keywords(p))
    );
    if p.remote {
        url.push_str("&remote=true");
    } else if let Some(location) = p.location {
        url.push_str(&format!("&locations={}", encode(location)));
    }
    url
}
