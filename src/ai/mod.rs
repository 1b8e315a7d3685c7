//! AI client module for LLM integration via OpenRouter.
//!
//! This module provides:
//! - `AiClient` trait for abstracting AI providers
//! - `CachingAiClient` implementation with disk-based caching
//! - Configuration via environment variables
//! - Prompt templates and the estimation operations built on them
//! - `FakeAiClient` for offline tests
//!
//! # Configuration
//!
//! Set these environment variables:
//!
//! - `OPENROUTER_API_KEY` (required): Your OpenRouter API key
//! - `PLATELOG_AI_MODEL` (optional): Model name, e.g., "openai/gpt-4o-mini"
//! - `PLATELOG_AI_BASE_URL` (optional): API base URL
//! - `PLATELOG_AI_CACHE_DIR` (optional): Cache directory path
//! - `PLATELOG_AI_OFFLINE` (optional): Set to "true" to use cache only
//! - `PLATELOG_AI_RATE_LIMIT_MS` (optional): Delay between requests in ms
//! - `PLATELOG_AI_TIMEOUT_SECS` (optional): Per-call deadline in seconds
//!
//! # Example
//!
//! ```ignore
//! use platelog_core::ai::{estimate_from_dish_name, CachingAiClient};
//!
//! let client = CachingAiClient::from_env()?;
//! let result = estimate_from_dish_name(&client, "Koshary", Some("1 plate")).await?;
//! println!("{} kcal", result.estimate.estimated_calories.unwrap_or(0.0));
//! ```

mod cache;
mod client;
mod config;
mod dish_name;
mod fake;
mod food_image;
pub mod prompts;
mod response;
mod suggest_meals;
mod types;

pub use cache::{AiCache, CacheKey, CacheStats, CachedAiResponse};
pub use client::{AiClient, AiError, CachingAiClient};
pub use config::{AiConfig, ConfigError};
pub use dish_name::{estimate_from_dish_name, DishNameResult};
pub use fake::FakeAiClient;
pub use food_image::{estimate_from_image, FoodImageResult};
pub use suggest_meals::{suggest_meals, SuggestMealsResult};
pub use types::{ChatMessage, ChatRequest, ChatResponse, ImageData, Role, Usage};
