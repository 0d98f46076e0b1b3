// All prompt constants for the job synthesis engine.

use crate::models::job::JobQuery;

/// Instruction block appended to every job-suggestion prompt.
/// Replace `{count}` before sending.
const JOB_SEARCH_INSTRUCTIONS: &str = r#"Return strictly minified JSON matching this EXACT schema (no extra fields):
{"jobs":[{"id":"string","title":"string","company":"string","location":"string","salary":"string","description":"string","postedAt":"string","link":"https://..."}]}

Rules:
- Return exactly {count} postings, spread across the searches above.
- "company" must be a real, specific employer name — never a placeholder like "Various companies" or "N/A".
- "link" must be an https URL to the posting itself or to a job-board search for it.
- Omit a field entirely if you do not know it; never write "N/A" or "unknown"."#;

/// Target posting count for a batch: 3 per query, clamped to [12, 20].
pub fn target_posting_count(query_count: usize) -> usize {
    (query_count * 3).clamp(12, 20)
}

/// Builds the job-suggestion prompt: one numbered line per query, the
/// caller's location/remote preferences, then the fixed instruction block.
pub fn build_job_search_prompt(
    queries: &[JobQuery],
    location: Option<&str>,
    remote: bool,
) -> String {
    let mut lines = vec![
        "Suggest realistic, current job opportunities for a candidate running these searches:"
            .to_string(),
    ];
    for (i, query) in queries.iter().enumerate() {
        lines.push(format!(
            "{}. {} — search phrase: \"{}\"",
            i + 1,
            query.title,
            query.query
        ));
    }
    if let Some(location) = location {
        lines.push(format!("Preferred location: {location}"));
    }
    if remote {
        lines.push("The candidate prefers remote-friendly roles.".to_string());
    }
    lines.push(String::new());
    lines.push(
        JOB_SEARCH_INSTRUCTIONS.replace("{count}", &target_posting_count(queries.len()).to_string()),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_count_scales_and_clamps() {
        assert_eq!(target_posting_count(1), 12);
        assert_eq!(target_posting_count(4), 12);
        assert_eq!(target_posting_count(5), 15);
        assert_eq!(target_posting_count(7), 20);
        assert_eq!(target_posting_count(50), 20);
    }

    #[test]
    fn test_prompt_lists_every_query() {
        let queries = vec![
            JobQuery {
                title: "Backend Engineer".to_string(),
                query: "backend engineer node".to_string(),
            },
            JobQuery {
                title: "Platform Engineer".to_string(),
                query: "platform engineer kubernetes".to_string(),
            },
        ];
        let prompt = build_job_search_prompt(&queries, Some("Berlin"), true);
        assert!(prompt.contains("1. Backend Engineer"));
        assert!(prompt.contains("2. Platform Engineer"));
        assert!(prompt.contains("Preferred location: Berlin"));
        assert!(prompt.contains("remote-friendly"));
        assert!(prompt.contains("\"jobs\""));
    }

    #[test]
    fn test_prompt_embeds_target_count() {
        let queries = vec![JobQuery {
            title: "SRE".to_string(),
            query: "site reliability engineer".to_string(),
        }];
        let prompt = build_job_search_prompt(&queries, None, false);
        assert!(prompt.contains("exactly 12 postings"));
    }
}
