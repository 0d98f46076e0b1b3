use serde::{Deserialize, Serialize};

/// A single job-board search produced by the resume analyzer: a display
/// title plus the phrase to feed into a board's search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobQuery {
    pub title: String,
    pub query: String,
}

/// One job opportunity surfaced to the user.
///
/// `url` is always a well-formed `https://` link and `company` is never a
/// generic placeholder once the posting has been through normalization.
/// `id` is unique within a single response batch only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posted_at: Option<String>,
    pub url: String,
    /// Which job-search provider produced or validated the link.
    pub source: String,
}
