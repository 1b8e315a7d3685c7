//! Semantic validation of model-produced nutritional estimates.
//!
//! Models sometimes answer "0 calories" for real food. That is always wrong
//! except for literal zero-calorie consumables, and this gate is the system's
//! only defense against that class of silently-wrong answers. The prompts ask
//! the model to follow the same rules, but prompt compliance is not guaranteed,
//! so enforcement lives here and every requester goes through this one
//! function.

use crate::error::EstimateError;
use crate::nutrition::NutritionalEstimate;

/// Food names permitted to carry zero calories. Matched as case-insensitive
/// substrings of each identified food item's name.
const ZERO_CALORIE_EXEMPT: &[&str] = &[
    "water",
    "black coffee",
    "espresso",
    "black tea",
    "green tea",
    "plain tea",
    "diet soda",
];

/// Whether any identified food item is on the zero-calorie exemption list.
pub fn is_zero_calorie_exempt(estimate: &NutritionalEstimate) -> bool {
    estimate.food_items.iter().any(|item| {
        let name = item.name.to_lowercase();
        ZERO_CALORIE_EXEMPT.iter().any(|ex| name.contains(ex))
    })
}

/// The single policy gate between whatever the model said and what the rest of
/// the system is allowed to trust.
///
/// Rules, applied in order:
/// 1. No candidate at all fails with [`EstimateError::ModelOutputMissing`].
/// 2. The non-food sentinel (no food items, zero calories) is accepted as-is.
/// 3. Identified food with missing or non-positive calories fails with
///    [`EstimateError::ImplausibleZeroCalories`], unless a food item is on the
///    zero-calorie exemption list.
/// 4. Identified food with a blank `explanation` fails with
///    [`EstimateError::ModelOutputMissing`]: the schema requires the model to
///    justify every food estimate.
/// 5. Everything else is accepted unchanged.
///
/// There is no repair and no retry. A rejected estimate must never be offered
/// for logging.
pub fn validate_estimate(
    candidate: Option<NutritionalEstimate>,
) -> Result<NutritionalEstimate, EstimateError> {
    let estimate = candidate.ok_or_else(|| {
        EstimateError::ModelOutputMissing("model produced no candidate estimate".to_string())
    })?;

    if estimate.food_items.is_empty() {
        // Confirmed non-food input. The sentinel is an accepted outcome.
        return Ok(estimate);
    }

    let calories = estimate.estimated_calories.unwrap_or(0.0);
    if calories <= 0.0 && !is_zero_calorie_exempt(&estimate) {
        let food_items = estimate
            .food_items
            .iter()
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        tracing::warn!(
            food_items = %food_items,
            calories = calories,
            "Rejecting zero-calorie estimate for identified food"
        );
        return Err(EstimateError::ImplausibleZeroCalories { food_items });
    }

    if estimate.explanation.trim().is_empty() {
        return Err(EstimateError::ModelOutputMissing(
            "estimate for identified food carries no explanation".to_string(),
        ));
    }

    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::FoodItem;

    fn estimate(food_items: &[&str], calories: Option<f64>) -> NutritionalEstimate {
        NutritionalEstimate {
            food_items: food_items.iter().map(|n| FoodItem::new(*n)).collect(),
            estimated_calories: calories,
            explanation: "test estimate".to_string(),
            ..NutritionalEstimate::non_food()
        }
    }

    #[test]
    fn test_accepts_food_with_calories_unchanged() {
        let candidate = estimate(&["Koshary"], Some(550.0));
        let accepted = validate_estimate(Some(candidate.clone())).unwrap();
        // Identity on accept: nothing is normalized away
        assert_eq!(accepted, candidate);
    }

    #[test]
    fn test_rejects_zero_calorie_food() {
        let result = validate_estimate(Some(estimate(&["Pizza"], Some(0.0))));
        match result {
            Err(EstimateError::ImplausibleZeroCalories { food_items }) => {
                assert_eq!(food_items, "Pizza");
            }
            other => panic!("expected ImplausibleZeroCalories, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_zero_calorie_salad() {
        let result = validate_estimate(Some(estimate(&["Green Salad"], Some(0.0))));
        assert!(matches!(
            result,
            Err(EstimateError::ImplausibleZeroCalories { .. })
        ));
    }

    #[test]
    fn test_rejects_missing_calories_for_food() {
        let result = validate_estimate(Some(estimate(&["Pizza"], None)));
        assert!(matches!(
            result,
            Err(EstimateError::ImplausibleZeroCalories { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_calories_for_food() {
        let result = validate_estimate(Some(estimate(&["Pizza"], Some(-10.0))));
        assert!(matches!(
            result,
            Err(EstimateError::ImplausibleZeroCalories { .. })
        ));
    }

    #[test]
    fn test_water_exemption_is_case_insensitive() {
        for name in ["Water", "water", "WATER", "Sparkling Water", "glass of water"] {
            let accepted = validate_estimate(Some(estimate(&[name], Some(0.0))));
            assert!(accepted.is_ok(), "expected {:?} to be exempt", name);
        }
    }

    #[test]
    fn test_black_coffee_exemption() {
        let accepted = validate_estimate(Some(estimate(&["Black Coffee"], Some(0.0)))).unwrap();
        assert_eq!(accepted.estimated_calories, Some(0.0));
    }

    #[test]
    fn test_exemption_applies_to_mixed_items() {
        // One exempt item in the list exempts the whole estimate
        let result = validate_estimate(Some(estimate(&["Water", "Ice Cubes"], Some(0.0))));
        assert!(result.is_ok());
    }

    #[test]
    fn test_non_exempt_zero_calorie_drink_rejected() {
        let result = validate_estimate(Some(estimate(&["Orange Juice"], Some(0.0))));
        assert!(matches!(
            result,
            Err(EstimateError::ImplausibleZeroCalories { .. })
        ));
    }

    #[test]
    fn test_rejects_blank_explanation_for_food() {
        for explanation in ["", "   \n"] {
            let mut candidate = estimate(&["Pizza"], Some(300.0));
            candidate.explanation = explanation.to_string();
            let result = validate_estimate(Some(candidate));
            assert!(
                matches!(result, Err(EstimateError::ModelOutputMissing(_))),
                "expected blank explanation {:?} to be rejected",
                explanation
            );
        }
    }

    #[test]
    fn test_sentinel_needs_no_explanation() {
        // The non-food sentinel is accepted even without an explanation
        let accepted = validate_estimate(Some(NutritionalEstimate::non_food())).unwrap();
        assert!(accepted.explanation.is_empty());
    }

    #[test]
    fn test_non_food_sentinel_passes_through() {
        let accepted = validate_estimate(Some(NutritionalEstimate::non_food())).unwrap();
        assert!(accepted.is_non_food());
    }

    #[test]
    fn test_missing_output_fails() {
        let result = validate_estimate(None);
        assert!(matches!(result, Err(EstimateError::ModelOutputMissing(_))));
    }

    #[test]
    fn test_food_with_positive_calories_and_exempt_name() {
        // Exemption only matters for zero calories; positive calories pass anyway
        let accepted = validate_estimate(Some(estimate(&["Coconut Water"], Some(45.0)))).unwrap();
        assert_eq!(accepted.estimated_calories, Some(45.0));
    }
}
