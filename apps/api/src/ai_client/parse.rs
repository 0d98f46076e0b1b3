use serde_json::Value;

use crate::ai_client::AiError;

/// Extracts the first well-formed JSON object embedded in free-form model
/// output. The model may wrap its JSON in prose or markdown fences; this
/// slices from the first `{` to the last `}` (inclusive) and parses strictly.
///
/// Known limitation: if the surrounding commentary itself contains an
/// unrelated `{...}` pair enclosing the real object, the outer slice is what
/// gets parsed (and typically fails). Deliberately not upgraded to a
/// balanced-brace scanner.
pub fn parse_embedded_json(text: &str) -> Result<Value, AiError> {
    let start = text.find('{');
    let end = text.rfind('}');

    let (start, end) = match (start, end) {
        (Some(s), Some(e)) if e > s => (s, e),
        _ => {
            return Err(AiError::Malformed(
                "no JSON object found in response".to_string(),
            ))
        }
    };

    serde_json::from_str(&text[start..=end]).map_err(|e| AiError::Malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_object_surrounded_by_noise() {
        let parsed = parse_embedded_json(r#"noise {"a":1} noise"#).unwrap();
        assert_eq!(parsed, json!({"a": 1}));
    }

    #[test]
    fn test_extracts_object_inside_markdown_fences() {
        let parsed = parse_embedded_json("```json\n{\"key\": \"value\"}\n```").unwrap();
        assert_eq!(parsed, json!({"key": "value"}));
    }

    #[test]
    fn test_no_braces_is_malformed() {
        let err = parse_embedded_json("no braces here").unwrap_err();
        assert!(matches!(err, AiError::Malformed(_)));
    }

    #[test]
    fn test_closing_brace_before_opening_is_malformed() {
        let err = parse_embedded_json("} out of order {").unwrap_err();
        assert!(matches!(err, AiError::Malformed(_)));
    }

    #[test]
    fn test_unparseable_slice_is_malformed() {
        let err = parse_embedded_json("Sure! Here's the JSON: ```{not valid json```").unwrap_err();
        assert!(matches!(err, AiError::Malformed(_)));
    }

    #[test]
    fn test_nested_objects_parse() {
        let parsed = parse_embedded_json(r#"result: {"outer": {"inner": [1, 2]}}"#).unwrap();
        assert_eq!(parsed["outer"]["inner"][1], json!(2));
    }
}
