//! Prompt template for estimating nutrition from a dish name.

/// Prompt name for cache keys.
pub const DISH_NAME_PROMPT_NAME: &str = "analyze_dish_name";

/// Render the dish-name analysis prompt.
///
/// The dish name may be in any language. An optional portion size (e.g.
/// "1 slice", "100g") adjusts the estimate.
pub fn render_dish_name_prompt(dish_name: &str, portion_size: Option<&str>) -> String {
    let portion_line = portion_size
        .map(|p| format!("Portion Size: {}\n", p))
        .unwrap_or_default();

    format!(
        r#"You are a nutritional analysis AI. Analyze the provided dish name and return a detailed nutritional estimate as JSON.

Dish Name: {dish_name}
{portion_line}
Return a JSON object with this structure:
{{
  "foodItems": [{{"name": "string"}}],
  "ingredients": ["string"],
  "estimatedCalories": number,
  "estimatedProtein": number (grams),
  "estimatedCarbs": number (grams),
  "estimatedFat": number (grams),
  "estimatedSaturatedFat": number (grams),
  "estimatedFiber": number (grams),
  "estimatedSugar": number (grams),
  "estimatedSodium": number (milligrams),
  "estimatedVitaminA": number (micrograms),
  "estimatedVitaminC": number (milligrams),
  "estimatedVitaminD": number (micrograms),
  "estimatedVitaminE": number (milligrams),
  "estimatedVitaminK": number (micrograms),
  "estimatedVitaminB1": number (milligrams),
  "estimatedVitaminB2": number (milligrams),
  "estimatedVitaminB3": number (milligrams),
  "estimatedVitaminB5": number (milligrams),
  "estimatedVitaminB6": number (milligrams),
  "estimatedVitaminB7": number (micrograms),
  "estimatedVitaminB9": number (micrograms),
  "estimatedVitaminB12": number (micrograms),
  "estimatedCalcium": number (milligrams),
  "estimatedIron": number (milligrams),
  "estimatedMagnesium": number (milligrams),
  "estimatedZinc": number (milligrams),
  "confidence": number between 0 and 1,
  "explanation": "string"
}}

CRITICAL RULES:
1. JSON ONLY: Your entire response MUST be a single valid JSON object. No other text.
2. ALWAYS IDENTIFY FOOD: The input can be in any language. Make a best-effort guess if unsure (e.g., for "Torsken", identify "Cod fish"). For any plausible food input, "foodItems" MUST contain at least one item.
3. NEVER ZERO CALORIES FOR FOOD: If "foodItems" is not empty, "estimatedCalories" MUST be greater than 0. The only exceptions are genuinely zero-calorie items like plain water or black coffee.
4. HANDLE NON-FOOD: Only if the input definitively names no food (e.g., "a chair"), return {{"foodItems": [], "estimatedCalories": 0, "explanation": "..."}}.
5. OMIT UNKNOWNS: Leave out any nutrient field you cannot estimate. Never default an unknown nutrient to 0.
6. EXPLAIN: Briefly justify your estimate in the "explanation" field."#,
        dish_name = dish_name,
        portion_line = portion_line,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_prompt_with_portion() {
        let prompt = render_dish_name_prompt("Koshary", Some("1 plate"));
        assert!(prompt.contains("Dish Name: Koshary"));
        assert!(prompt.contains("Portion Size: 1 plate"));
        assert!(prompt.contains("estimatedCalories"));
        assert!(prompt.contains("NEVER ZERO CALORIES FOR FOOD"));
    }

    #[test]
    fn test_render_prompt_without_portion() {
        let prompt = render_dish_name_prompt("Pad Thai", None);
        assert!(prompt.contains("Dish Name: Pad Thai"));
        assert!(!prompt.contains("Portion Size:"));
    }
}
