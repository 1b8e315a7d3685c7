//! Prompt template for generating meal suggestions.

use crate::nutrition::MealPreferences;

/// Prompt name for cache keys.
pub const SUGGEST_MEALS_PROMPT_NAME: &str = "suggest_meals";

/// Render the meal suggestion prompt from user preferences.
pub fn render_suggest_meals_prompt(prefs: &MealPreferences) -> String {
    let mut constraints = String::new();
    if let Some(ref restrictions) = prefs.dietary_restrictions {
        constraints.push_str(&format!("Dietary Restrictions: {}\n", restrictions));
    }
    if let Some(ref allergies) = prefs.allergies {
        constraints.push_str(&format!("Allergies: {}\n", allergies));
    }
    if let Some(calories) = prefs.caloric_intake {
        constraints.push_str(&format!(
            "The user is aiming for around {} calories. The suggested meals should fit within this budget.\n",
            calories
        ));
    }
    if let Some(ref language) = prefs.language {
        constraints.push_str(&format!(
            "Write the meal names, ingredients, and instructions in {}.\n",
            language
        ));
    }

    format!(
        r#"You are an AI chef and nutritionist that suggests healthy meals from a wide variety of international cuisines.
Suggest {num} healthy meals. The suggestions should be diverse and creative.
Consider the following user preferences:

{constraints}
CRITICAL RULES:
1. Your entire response MUST be a single valid JSON array of meal objects. Do not include any other text, explanations, or markdown formatting like ```json.
2. Each meal object has: "name" (string), "ingredients" (string), "instructions" (string), and "nutrition" (object).
3. The "nutrition" object MUST estimate one serving: "foodItems" (array of {{"name": string}}), "estimatedCalories" (greater than 0), macro and micronutrient fields where known, and an "explanation" string. Omit unknown nutrients instead of writing 0.
4. Meal names can be in their original language where appropriate (e.g., "Shakshuka", "Pad Thai").
5. Unless it is impossible to meet the user's constraints, you MUST return exactly {num} suggestions. If you absolutely cannot generate suggestions, return an empty JSON array: []."#,
        num = prefs.num_suggestions,
        constraints = constraints,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_with_constraints() {
        let prefs = MealPreferences {
            dietary_restrictions: Some("vegetarian".to_string()),
            allergies: Some("peanuts".to_string()),
            caloric_intake: Some(600.0),
            num_suggestions: 3,
            language: None,
        };

        let prompt = render_suggest_meals_prompt(&prefs);
        assert!(prompt.contains("Suggest 3 healthy meals"));
        assert!(prompt.contains("Dietary Restrictions: vegetarian"));
        assert!(prompt.contains("Allergies: peanuts"));
        assert!(prompt.contains("600 calories"));
    }

    #[test]
    fn test_render_prompt_minimal() {
        let prompt = render_suggest_meals_prompt(&MealPreferences::new(5));
        assert!(prompt.contains("Suggest 5 healthy meals"));
        assert!(!prompt.contains("Dietary Restrictions:"));
        assert!(!prompt.contains("Allergies:"));
    }

    #[test]
    fn test_render_prompt_with_language() {
        let prefs = MealPreferences {
            language: Some("Arabic".to_string()),
            num_suggestions: 3,
            ..Default::default()
        };
        let prompt = render_suggest_meals_prompt(&prefs);
        assert!(prompt.contains("in Arabic"));
    }
}
