//! Weather summary model: the cached, display-ready outcome of a search

use serde::{Deserialize, Serialize};

use super::ClothingRecommendation;

/// One distinct condition observed within the forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionChange {
    /// Condition description (deduplication key)
    pub description: String,
    /// Icon ID paired with the first occurrence of this description
    pub icon: String,
}

/// Near-term weather summary with its embedded clothing recommendation
///
/// Computed once per search and cached keyed by postal-code prefix; entries
/// older than the retention window are treated as absent and recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSummary {
    /// Temperature of the forecast point nearest to now, in Celsius
    pub current_temp: f32,
    /// Perceived temperature of that point, in Celsius
    pub feels_like: f32,
    /// Minimum temperature across the supplied points
    pub min_temp: f32,
    /// Maximum temperature across the supplied points
    pub max_temp: f32,
    /// Condition description of the current point
    pub current_condition: String,
    /// Icon ID of the current point
    pub current_icon: String,
    /// Human-readable label for the covered window
    pub time_range: String,
    /// Distinct conditions in first-seen order
    pub condition_changes: Vec<ConditionChange>,
    /// Clothing recommendation derived from the worst point in the window
    pub recommendation: ClothingRecommendation,
}
