//! Nutritional estimation from a dish name.

use crate::ai::prompts::dish_name::{render_dish_name_prompt, DISH_NAME_PROMPT_NAME};
use crate::ai::response::{missing_output, parse_model_json};
use crate::ai::{AiClient, ChatMessage, ChatRequest, Usage};
use crate::error::EstimateError;
use crate::nutrition::NutritionalEstimate;
use crate::validate::validate_estimate;

/// Result of a dish-name analysis.
#[derive(Debug)]
pub struct DishNameResult {
    pub estimate: NutritionalEstimate,
    pub cached: bool,
    pub usage: Usage,
}

/// Estimate the nutritional content of a named dish.
///
/// The dish name may be in any language; `portion_size` (e.g. "1 slice",
/// "100g") adjusts the estimate when given. Makes exactly one model call, no
/// retries. The returned estimate has passed the zero-calorie validation gate.
pub async fn estimate_from_dish_name(
    ai_client: &dyn AiClient,
    dish_name: &str,
    portion_size: Option<&str>,
) -> Result<DishNameResult, EstimateError> {
    let prompt = render_dish_name_prompt(dish_name, portion_size);
    let request = ChatRequest {
        messages: vec![ChatMessage::user(prompt)],
        json_response: true,
        max_tokens: Some(2048),
        temperature: Some(0.2),
    };

    let response = ai_client.complete(DISH_NAME_PROMPT_NAME, request).await?;

    let candidate: NutritionalEstimate =
        parse_model_json(&response.content).ok_or_else(|| missing_output(&response.content))?;

    let estimate = validate_estimate(Some(candidate))?;

    Ok(DishNameResult {
        estimate,
        cached: response.cached,
        usage: response.usage,
    })
}
