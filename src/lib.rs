pub mod ai;
pub mod error;
pub mod nutrition;
pub mod validate;

pub use ai::{
    estimate_from_dish_name, estimate_from_image, suggest_meals, AiClient, CachingAiClient,
    DishNameResult, FakeAiClient, FoodImageResult, SuggestMealsResult,
};
pub use error::EstimateError;
pub use nutrition::{FoodItem, MealPreferences, MealSuggestion, NutritionalEstimate};
pub use validate::validate_estimate;
