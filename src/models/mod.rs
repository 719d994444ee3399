//! Data models for the Wearcast application
//!
//! This module contains the core domain models organized by concern:
//! - Clothing: wardrobe items and recommendation output
//! - Forecast: gateway forecast points and the derived engine input
//! - Summary: the cached weather summary shown to the user

pub mod clothing;
pub mod forecast;
pub mod summary;

// Re-export all public types for convenient access
pub use clothing::{Category, ClothingItem, ClothingRecommendation, MAX_THICKNESS, ThicknessLevel};
pub use forecast::{ForecastPoint, WINDY_THRESHOLD_MS, WeatherSignal};
pub use summary::{ConditionChange, WeatherSummary};
