//! Weather gateway: postal-code geocoding and forecast retrieval
//!
//! The gateway is the only network boundary of the application. It resolves a
//! postal-code prefix to coordinates and fetches a multi-step forecast,
//! surfacing failures as single descriptive errors without retrying.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::WearcastConfig;
use crate::error::WearcastError;
use crate::models::ForecastPoint;

/// Result of resolving a postal-code prefix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Place name reported by the geocoder
    pub name: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
}

/// External weather collaborator contract
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    /// Resolve a normalized postal-code prefix to coordinates
    async fn resolve(&self, postal_prefix: &str) -> Result<GeocodedLocation, WearcastError>;

    /// Fetch the multi-step forecast for the given coordinates
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastPoint>, WearcastError>;
}

/// `OpenWeather` API client
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    geo_base_url: String,
    forecast_base_url: String,
    country: String,
    units: String,
}

impl OpenWeatherClient {
    /// Create a new client from the application configuration
    pub fn new(config: &WearcastConfig) -> Result<Self, WearcastError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.weather.timeout_seconds)))
            .user_agent(concat!("wearcast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WearcastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.weather.api_key.clone().unwrap_or_default(),
            geo_base_url: config.weather.geo_base_url.clone(),
            forecast_base_url: config.weather.forecast_base_url.clone(),
            country: config.weather.country.clone(),
            units: config.weather.units.clone(),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
        what: &str,
    ) -> Result<T, WearcastError> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| WearcastError::api(format!("{what} request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = openweather::error_message(&body);

            return Err(match status.as_u16() {
                401 => WearcastError::api(format!("{what} rejected: invalid or missing API key")),
                404 => WearcastError::api(format!("{what} found no match: {message}")),
                _ => WearcastError::api(format!("{what} error {status}: {message}")),
            });
        }

        response
            .json()
            .await
            .map_err(|e| WearcastError::api(format!("Failed to parse {what} response: {e}")))
    }
}

#[async_trait]
impl WeatherGateway for OpenWeatherClient {
    async fn resolve(&self, postal_prefix: &str) -> Result<GeocodedLocation, WearcastError> {
        debug!("Geocoding postal code prefix: {}", postal_prefix);

        let url = format!(
            "{}/zip?zip={},{}&appid={}",
            self.geo_base_url,
            urlencoding::encode(postal_prefix),
            self.country,
            self.api_key
        );
        let response: openweather::GeocodingResponse = self.get_json(url, "Geocoding").await?;

        let location = GeocodedLocation::from(response);
        info!(
            "Resolved {} to {} ({:.4}, {:.4})",
            postal_prefix, location.name, location.latitude, location.longitude
        );
        Ok(location)
    }

    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ForecastPoint>, WearcastError> {
        debug!("Fetching forecast for ({:.4}, {:.4})", latitude, longitude);

        let url = format!(
            "{}/forecast?lat={latitude}&lon={longitude}&units={}&appid={}",
            self.forecast_base_url, self.units, self.api_key
        );
        let response: openweather::ForecastResponse = self.get_json(url, "Forecast").await?;

        let points: Vec<ForecastPoint> = response
            .list
            .into_iter()
            .map(ForecastPoint::from)
            .collect();
        debug!("Retrieved {} forecast points", points.len());
        Ok(points)
    }
}

/// `OpenWeather` API response structures and conversion utilities
mod openweather {
    use chrono::{TimeZone, Utc};
    use serde::Deserialize;

    use super::{ForecastPoint, GeocodedLocation};

    /// Geocoding response from the `OpenWeather` zip endpoint
    #[derive(Debug, Deserialize)]
    pub struct GeocodingResponse {
        pub name: String,
        pub lat: f64,
        pub lon: f64,
        pub country: String,
    }

    impl From<GeocodingResponse> for GeocodedLocation {
        fn from(response: GeocodingResponse) -> Self {
            Self {
                latitude: response.lat,
                longitude: response.lon,
                name: response.name,
                country: response.country,
            }
        }
    }

    /// Forecast response from the `OpenWeather` 5-day/3-hour endpoint
    #[derive(Debug, Deserialize)]
    pub struct ForecastResponse {
        pub list: Vec<ForecastEntry>,
    }

    /// One forecast slot
    #[derive(Debug, Deserialize)]
    pub struct ForecastEntry {
        /// Unix timestamp for this slot
        pub dt: i64,
        pub main: MainReadings,
        #[serde(default)]
        pub weather: Vec<ConditionEntry>,
        #[serde(default)]
        pub wind: WindReadings,
    }

    /// Temperature readings for one slot
    #[derive(Debug, Deserialize)]
    pub struct MainReadings {
        pub temp: f32,
        pub feels_like: f32,
    }

    /// Condition descriptor for one slot
    #[derive(Debug, Deserialize)]
    pub struct ConditionEntry {
        /// Primary group (e.g. "Rain", "Clear")
        pub main: String,
        /// Detailed description (e.g. "light rain")
        pub description: String,
        pub icon: String,
    }

    /// Wind readings for one slot
    #[derive(Debug, Default, Deserialize)]
    pub struct WindReadings {
        #[serde(default)]
        pub speed: f32,
    }

    impl From<ForecastEntry> for ForecastPoint {
        fn from(entry: ForecastEntry) -> Self {
            let timestamp = Utc
                .timestamp_opt(entry.dt, 0)
                .single()
                .unwrap_or_else(Utc::now);

            let (condition, description, icon) = entry
                .weather
                .into_iter()
                .next()
                .map_or_else(
                    || ("Unknown".to_string(), String::new(), String::new()),
                    |c| (c.main, c.description, c.icon),
                );

            Self {
                timestamp,
                temperature: entry.main.temp,
                feels_like: entry.main.feels_like,
                condition,
                description,
                icon,
                wind_speed: entry.wind.speed,
            }
        }
    }

    /// Extract the error message from an `OpenWeather` error body, falling
    /// back to the raw body text.
    pub fn error_message(body: &str) -> String {
        #[derive(Deserialize)]
        struct ErrorBody {
            message: String,
        }
        serde_json::from_str::<ErrorBody>(body)
            .map(|e| e.message)
            .unwrap_or_else(|_| body.to_string())
    }
}
