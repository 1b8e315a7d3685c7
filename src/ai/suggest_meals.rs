//! Meal suggestion generation.

use serde::Deserialize;

use crate::ai::prompts::suggest_meals::{render_suggest_meals_prompt, SUGGEST_MEALS_PROMPT_NAME};
use crate::ai::response::parse_model_json;
use crate::ai::{AiClient, ChatMessage, ChatRequest, Usage};
use crate::error::EstimateError;
use crate::nutrition::{MealPreferences, MealSuggestion, NutritionalEstimate};
use crate::validate::validate_estimate;

/// One suggestion as the model returns it, before validating the nested
/// nutrition estimate.
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    name: String,
    ingredients: String,
    instructions: String,
    #[serde(default)]
    nutrition: Option<NutritionalEstimate>,
}

/// Result of a meal suggestion request.
#[derive(Debug)]
pub struct SuggestMealsResult {
    pub suggestions: Vec<MealSuggestion>,
    pub cached: bool,
    pub usage: Usage,
}

/// Request diverse meal ideas matching the given preferences, in one model
/// call.
///
/// Returns either `prefs.num_suggestions` suggestions or an empty list when
/// the constraints are infeasible; an empty list is not an error. Each nested
/// nutrition estimate goes through the same validation gate as the single-dish
/// estimators. A suggestion whose nested estimate fails validation keeps its
/// recipe but has its nutrition degraded to unknown; one bad estimate never
/// discards the batch.
pub async fn suggest_meals(
    ai_client: &dyn AiClient,
    prefs: &MealPreferences,
) -> Result<SuggestMealsResult, EstimateError> {
    let prompt = render_suggest_meals_prompt(prefs);
    let request = ChatRequest {
        messages: vec![ChatMessage::user(prompt)],
        json_response: false,
        max_tokens: Some(4096),
        temperature: Some(0.7),
    };

    let response = ai_client
        .complete(SUGGEST_MEALS_PROMPT_NAME, request)
        .await
        .map_err(|e| EstimateError::SuggestionGenerationFailed(e.to_string()))?;

    let raw: Vec<RawSuggestion> = parse_model_json(&response.content).ok_or_else(|| {
        let excerpt: String = response.content.chars().take(120).collect();
        EstimateError::SuggestionGenerationFailed(format!(
            "response was not a JSON array of suggestions: {:?}",
            excerpt
        ))
    })?;

    // All-or-nothing batch contract: an empty array means the constraints were
    // infeasible, any other count must match the request exactly.
    if !raw.is_empty() && raw.len() != prefs.num_suggestions as usize {
        return Err(EstimateError::SuggestionGenerationFailed(format!(
            "requested {} suggestions, model returned {}",
            prefs.num_suggestions,
            raw.len()
        )));
    }

    let suggestions = raw
        .into_iter()
        .map(|s| {
            let nutrition = match validate_estimate(s.nutrition) {
                Ok(estimate) => Some(estimate),
                Err(e) => {
                    tracing::warn!(
                        meal = %s.name,
                        error = %e,
                        "Degrading suggestion nutrition to unknown"
                    );
                    None
                }
            };
            MealSuggestion {
                name: s.name,
                ingredients: s.ingredients,
                instructions: s.instructions,
                nutrition,
            }
        })
        .collect();

    Ok(SuggestMealsResult {
        suggestions,
        cached: response.cached,
        usage: response.usage,
    })
}
