//! Parsing of raw model output into candidate estimates.

use serde::de::DeserializeOwned;

use crate::error::EstimateError;

/// Parse the model's text content as JSON, tolerating surrounding whitespace
/// and markdown code fences. The prompts forbid fences, but models still emit
/// them occasionally.
///
/// Returns `None` when the content is empty or does not fit `T`; the caller
/// decides which failure that maps to.
pub(crate) fn parse_model_json<T: DeserializeOwned>(content: &str) -> Option<T> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return None;
    }

    let stripped = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .map(|s| s.strip_suffix("```").unwrap_or(s))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(stripped).ok()
}

/// Map an unparseable estimate payload to the missing-output failure, with a
/// short excerpt of what the model actually said.
pub(crate) fn missing_output(content: &str) -> EstimateError {
    let excerpt: String = content.chars().take(120).collect();
    EstimateError::ModelOutputMissing(format!(
        "response did not match the nutrition schema: {:?}",
        excerpt
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::NutritionalEstimate;

    #[test]
    fn test_parse_plain_json() {
        let content = r#"{"foodItems": [{"name": "Apple"}], "estimatedCalories": 95, "explanation": "x"}"#;
        let estimate: NutritionalEstimate = parse_model_json(content).unwrap();
        assert_eq!(estimate.estimated_calories, Some(95.0));
    }

    #[test]
    fn test_parse_fenced_json() {
        let content = "```json\n{\"foodItems\": [], \"estimatedCalories\": 0, \"explanation\": \"x\"}\n```";
        let estimate: NutritionalEstimate = parse_model_json(content).unwrap();
        assert!(estimate.is_non_food());
    }

    #[test]
    fn test_parse_empty_content() {
        assert!(parse_model_json::<NutritionalEstimate>("").is_none());
        assert!(parse_model_json::<NutritionalEstimate>("   \n").is_none());
    }

    #[test]
    fn test_parse_garbage_content() {
        assert!(parse_model_json::<NutritionalEstimate>("I cannot help with that.").is_none());
    }
}
