//! Failure taxonomy for nutritional estimation.

use thiserror::Error;

use crate::ai::AiError;

/// Errors surfaced to callers of the estimation operations.
///
/// All variants are terminal at this crate's boundary: nothing is retried
/// internally, and a failed estimate is never offered for logging. The calling
/// UI decides whether the user retries manually.
#[derive(Error, Debug)]
pub enum EstimateError {
    /// The model call produced no parseable structured result: transport
    /// failure, timeout, safety block, empty content, or schema mismatch.
    #[error("Model returned no usable output: {0}")]
    ModelOutputMissing(String),

    /// Structurally valid output claiming zero (or missing) calories for
    /// identified food that is not on the zero-calorie exemption list.
    #[error("Implausible zero-calorie estimate for food: {food_items}")]
    ImplausibleZeroCalories {
        /// Comma-separated names of the offending food items.
        food_items: String,
    },

    /// The suggestion batch failed to parse as an array of suggestions.
    #[error("Meal suggestion generation failed: {0}")]
    SuggestionGenerationFailed(String),
}

impl From<AiError> for EstimateError {
    /// Any infrastructure-level failure of the model call is indistinguishable
    /// from the model producing nothing, so it maps to `ModelOutputMissing`.
    fn from(err: AiError) -> Self {
        EstimateError::ModelOutputMissing(err.to_string())
    }
}
