//! Nutritional estimate types.
//!
//! These types are the structural contract for everything the model returns.
//! They deserialize directly from the model's JSON output; a response that does
//! not fit this shape is a schema mismatch, which callers treat the same as no
//! output at all. Whether a structurally valid estimate is *believable* is
//! decided separately by [`crate::validate::validate_estimate`].
//!
//! All nutrient fields are optional: absence means "unknown", never "zero".
//! The field layout is flat so an accepted estimate can be copied losslessly
//! into a persisted meal record by the caller.

use serde::{Deserialize, Serialize};

/// A single food item identified in a meal, in detection order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
}

impl FoodItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A nutritional estimate for one food input.
///
/// Macro amounts are in grams, sodium in milligrams; vitamin and mineral units
/// follow the conventional unit for each nutrient (see the prompt templates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionalEstimate {
    /// Food items identified in the meal. Empty only for the non-food sentinel.
    pub food_items: Vec<FoodItem>,
    /// Estimated list of ingredients. Advisory, never validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<String>>,
    /// Estimated calorie count. `None` means the model omitted it, which the
    /// validator rejects for any non-exempt food.
    #[serde(default)]
    pub estimated_calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_carbs: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_saturated_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_sodium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_a: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_c: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_d: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_e: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_k: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b1: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b5: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b6: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b7: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b9: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vitamin_b12: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calcium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_iron: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_magnesium: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_zinc: Option<f64>,
    /// Model confidence in [0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// How the model arrived at its estimate. Required by the schema;
    /// a response without it is a schema mismatch.
    pub explanation: String,
}

impl NutritionalEstimate {
    /// The sentinel shape for confirmed non-food input: no food items and
    /// zero calories. This is an accepted outcome, not a failure.
    pub fn non_food() -> Self {
        Self {
            food_items: vec![],
            ingredients: None,
            estimated_calories: Some(0.0),
            estimated_protein: None,
            estimated_carbs: None,
            estimated_fat: None,
            estimated_saturated_fat: None,
            estimated_fiber: None,
            estimated_sugar: None,
            estimated_sodium: None,
            estimated_vitamin_a: None,
            estimated_vitamin_c: None,
            estimated_vitamin_d: None,
            estimated_vitamin_e: None,
            estimated_vitamin_k: None,
            estimated_vitamin_b1: None,
            estimated_vitamin_b2: None,
            estimated_vitamin_b3: None,
            estimated_vitamin_b5: None,
            estimated_vitamin_b6: None,
            estimated_vitamin_b7: None,
            estimated_vitamin_b9: None,
            estimated_vitamin_b12: None,
            estimated_calcium: None,
            estimated_iron: None,
            estimated_magnesium: None,
            estimated_zinc: None,
            confidence: None,
            explanation: String::new(),
        }
    }

    /// Whether this estimate is the non-food sentinel.
    pub fn is_non_food(&self) -> bool {
        self.food_items.is_empty() && self.estimated_calories.unwrap_or(0.0) <= 0.0
    }
}

/// A suggested meal with its nested nutritional estimate.
///
/// `nutrition` is `None` when the model's nested estimate failed validation
/// and was degraded to "unknown" rather than discarding the suggestion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default)]
    pub nutrition: Option<NutritionalEstimate>,
}

/// User preferences for meal suggestions.
#[derive(Debug, Clone, Default)]
pub struct MealPreferences {
    /// Dietary restrictions (e.g., "vegetarian", "gluten-free").
    pub dietary_restrictions: Option<String>,
    /// Allergies to avoid (e.g., "peanuts, dairy").
    pub allergies: Option<String>,
    /// Target caloric intake the suggestions should fit.
    pub caloric_intake: Option<f64>,
    /// Number of meal suggestions to generate.
    pub num_suggestions: u32,
    /// Preferred output language for meal names and instructions.
    pub language: Option<String>,
}

impl MealPreferences {
    pub fn new(num_suggestions: u32) -> Self {
        Self {
            num_suggestions,
            ..Default::default()
        }
    }
}
