//! `Wearcast` - Postal-code weather outlook with clothing recommendations
//!
//! This library converts a postal-code prefix into a 12-hour weather summary
//! and a matching clothing recommendation drawn from a curated wardrobe
//! catalog.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod recommend;
pub mod service;
pub mod summarizer;
pub mod weather;

// Re-export core types for public API
pub use cache::SummaryCache;
pub use catalog::Wardrobe;
pub use config::WearcastConfig;
pub use error::WearcastError;
pub use models::{
    Category, ClothingItem, ClothingRecommendation, ForecastPoint, WeatherSignal, WeatherSummary,
};
pub use service::{OutlookService, normalize_postal_code};
pub use summarizer::{next_12_hours, summarize};
pub use weather::{GeocodedLocation, OpenWeatherClient, WeatherGateway};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WearcastError>;
