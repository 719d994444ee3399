//! Forecast data model: gateway points and the derived engine input

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wind speed above which conditions count as windy, in m/s
pub const WINDY_THRESHOLD_MS: f32 = 5.5;

/// One timestamped forecast entry from the weather gateway
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Timestamp for this forecast slot
    pub timestamp: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature: f32,
    /// Perceived temperature in Celsius
    pub feels_like: f32,
    /// Primary condition group (e.g. "Rain", "Snow", "Clear")
    pub condition: String,
    /// Detailed condition description (e.g. "light rain")
    pub description: String,
    /// Condition icon ID from the gateway
    pub icon: String,
    /// Wind speed in m/s
    pub wind_speed: f32,
}

impl ForecastPoint {
    /// Whether the primary condition is one that should dominate the
    /// clothing recommendation (rain, snow or thunderstorm).
    #[must_use]
    pub fn is_adverse(&self) -> bool {
        matches!(self.condition.as_str(), "Rain" | "Snow" | "Thunderstorm")
    }
}

/// Transient weather input to the recommendation engine
///
/// Constructed fresh per request from one representative forecast point plus
/// the min/max extrema of the surrounding window; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSignal {
    /// Ambient temperature in Celsius
    pub temperature: f32,
    /// Perceived temperature in Celsius
    pub feels_like: f32,
    /// Minimum temperature across the forecast window
    pub min_temp: f32,
    /// Maximum temperature across the forecast window
    pub max_temp: f32,
    /// Rain is expected
    pub is_raining: bool,
    /// Snow is expected
    pub is_snowing: bool,
    /// Clear or sunny conditions
    pub is_sunny: bool,
    /// Wind speed above [`WINDY_THRESHOLD_MS`]
    pub is_windy: bool,
    /// Raw condition label, matched verbatim against item conditions
    pub condition_label: String,
}

impl WeatherSignal {
    /// Derive an engine input from a representative forecast point and the
    /// temperature extrema of its window.
    #[must_use]
    pub fn from_point(point: &ForecastPoint, min_temp: f32, max_temp: f32) -> Self {
        Self {
            temperature: point.temperature,
            feels_like: point.feels_like,
            min_temp,
            max_temp,
            is_raining: point.condition == "Rain",
            is_snowing: point.condition == "Snow",
            is_sunny: point.condition == "Clear",
            is_windy: point.wind_speed > WINDY_THRESHOLD_MS,
            condition_label: point.description.clone(),
        }
    }

    /// Daily temperature swing across the window
    #[must_use]
    pub fn temperature_swing(&self) -> f32 {
        self.max_temp - self.min_temp
    }
}
