// All prompt constants for the resume analyzer.

/// Analysis prompt template.
/// Replace `{guidance}` and `{resume_text}` before sending.
const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following resume and produce a career assessment.

Return a JSON object with this EXACT schema (no extra fields):
{
  "summary": "2-3 sentence professional summary of the candidate",
  "keywords": ["skill or technology evident in the resume"],
  "strengths": ["notable strength with brief justification"],
  "nextSteps": ["concrete suggestion to improve the candidate's prospects"],
  "jobQueries": [
    {"title": "Job title to search for", "query": "search phrase for job boards"}
  ]
}

Rules:
- 5-12 keywords, 3-6 strengths, 3-6 nextSteps, 3-6 jobQueries.
- jobQueries must reflect roles the resume is actually competitive for today.
- Base every claim on the resume text; do not invent experience.
{guidance}
RESUME:
{resume_text}"#;

/// Builds the analysis prompt, weaving in the user's optional guidance line.
pub fn build_analysis_prompt(resume_text: &str, custom_prompt: Option<&str>) -> String {
    let guidance = match custom_prompt.map(str::trim) {
        Some(p) if !p.is_empty() => {
            format!("\nAdditional guidance from the candidate: {p}\n")
        }
        _ => String::new(),
    };
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{guidance}", &guidance)
        .replace("{resume_text}", resume_text)
}
