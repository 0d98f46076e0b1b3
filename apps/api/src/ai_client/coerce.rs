//! Field-level coercion rules for model-returned JSON.
//!
//! Every field coming back from the model is treated as possibly absent or
//! wrong-typed. Each rule here is a named function with a fixed default so
//! the behavior is testable in isolation, instead of inline fallback chains
//! at every use site.

use serde_json::Value;

use crate::models::job::JobQuery;

/// The field as an owned string, if present and actually a string.
pub fn opt_string(obj: &Value, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

/// The field as a trimmed, non-empty string.
pub fn opt_non_empty_string(obj: &Value, key: &str) -> Option<String> {
    opt_string(obj, key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// The field as a string, else the given default.
pub fn string_or(obj: &Value, key: &str, default: &str) -> String {
    opt_string(obj, key).unwrap_or_else(|| default.to_string())
}

/// The field as a list of strings. A missing or wrong-typed field becomes an
/// empty list; non-string items inside a valid list are skipped.
pub fn string_list(obj: &Value, key: &str) -> Vec<String> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// The field as a list of job queries. Items missing either `title` or
/// `query` are skipped rather than failing the batch.
pub fn job_query_list(obj: &Value, key: &str) -> Vec<JobQuery> {
    obj.get(key)
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|item| {
                    let title = opt_non_empty_string(item, "title")?;
                    let query = opt_non_empty_string(item, "query")?;
                    Some(JobQuery { title, query })
                })
                .collect()
        })
        .unwrap_or_default()
}
