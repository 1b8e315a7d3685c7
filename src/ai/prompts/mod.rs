//! AI prompt templates.
//!
//! Prompts are pure render functions so their substitution points stay
//! testable. The rules they state to the model (identify food, no zero
//! calories for food, omit unknowns) are guidance only; enforcement happens in
//! [`crate::validate`].

pub mod dish_name;
pub mod food_image;
pub mod suggest_meals;

pub use dish_name::render_dish_name_prompt;
pub use food_image::render_food_image_prompt;
pub use suggest_meals::render_suggest_meals_prompt;
