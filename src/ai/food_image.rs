//! Nutritional estimation from a meal photo using vision AI.

use crate::ai::prompts::food_image::{render_food_image_prompt, FOOD_IMAGE_PROMPT_NAME};
use crate::ai::response::{missing_output, parse_model_json};
use crate::ai::{AiClient, ChatMessage, ChatRequest, ImageData, Usage};
use crate::error::EstimateError;
use crate::nutrition::NutritionalEstimate;
use crate::validate::validate_estimate;

/// Result of a food-image analysis.
#[derive(Debug)]
pub struct FoodImageResult {
    pub estimate: NutritionalEstimate,
    pub cached: bool,
    pub usage: Usage,
}

/// Estimate the nutritional content of the meal in a photo.
///
/// `photo_data_uri` must be a base64 data URI with an explicit MIME type
/// (`data:<mime>;base64,<data>`). It is forwarded to the vision API unchanged;
/// a malformed URI is a caller-side error. Makes exactly one model call, no
/// retries. The returned estimate has passed the zero-calorie validation gate.
pub async fn estimate_from_image(
    ai_client: &dyn AiClient,
    photo_data_uri: &str,
) -> Result<FoodImageResult, EstimateError> {
    let prompt = render_food_image_prompt();
    let request = ChatRequest {
        messages: vec![ChatMessage::user_with_images(
            prompt,
            vec![ImageData::new(photo_data_uri)],
        )],
        json_response: true,
        max_tokens: Some(2048),
        temperature: Some(0.1),
    };

    let response = ai_client.complete(FOOD_IMAGE_PROMPT_NAME, request).await?;

    let candidate: NutritionalEstimate =
        parse_model_json(&response.content).ok_or_else(|| missing_output(&response.content))?;

    let estimate = validate_estimate(Some(candidate))?;

    Ok(FoodImageResult {
        estimate,
        cached: response.cached,
        usage: response.usage,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::FakeAiClient;

    const PHOTO: &str = "data:image/jpeg;base64,dGVzdA==";

    #[tokio::test]
    async fn test_estimates_photographed_meal() {
        let client = FakeAiClient::new().with_default_response(
            r#"{
                "foodItems": [{"name": "Pizza Slice"}],
                "estimatedCalories": 285,
                "estimatedProtein": 12,
                "estimatedCarbs": 36,
                "estimatedFat": 10,
                "explanation": "Standard slice of pepperoni pizza."
            }"#,
        );

        let result = estimate_from_image(&client, PHOTO).await.unwrap();

        assert_eq!(result.estimate.food_items[0].name, "Pizza Slice");
        assert_eq!(result.estimate.estimated_calories, Some(285.0));
    }

    #[tokio::test]
    async fn test_non_food_photo_yields_sentinel() {
        let client = FakeAiClient::new().with_default_response(
            r#"{"foodItems": [], "estimatedCalories": 0, "explanation": "The image shows a car."}"#,
        );

        let result = estimate_from_image(&client, PHOTO).await.unwrap();
        assert!(result.estimate.is_non_food());
    }

    #[tokio::test]
    async fn test_zero_calorie_food_photo_is_rejected() {
        let client = FakeAiClient::new().with_default_response(
            r#"{"foodItems": [{"name": "Green Salad"}], "estimatedCalories": 0, "explanation": "x"}"#,
        );

        let result = estimate_from_image(&client, PHOTO).await;
        assert!(matches!(
            result,
            Err(EstimateError::ImplausibleZeroCalories { .. })
        ));
    }

    #[tokio::test]
    async fn test_water_photo_is_accepted_at_zero_calories() {
        let client = FakeAiClient::new().with_default_response(
            r#"{"foodItems": [{"name": "Glass of Water"}], "estimatedCalories": 0, "explanation": "Plain water."}"#,
        );

        let result = estimate_from_image(&client, PHOTO).await.unwrap();
        assert_eq!(result.estimate.estimated_calories, Some(0.0));
    }

    #[tokio::test]
    async fn test_empty_model_content_is_missing_output() {
        let client = FakeAiClient::new().with_default_response("");

        let result = estimate_from_image(&client, PHOTO).await;
        assert!(matches!(result, Err(EstimateError::ModelOutputMissing(_))));
    }
}
