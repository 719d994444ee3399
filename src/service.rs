//! Outlook service: orchestrates a postal-code search end to end
//!
//! normalize → cache lookup → gateway geocode + forecast → 12-hour narrowing
//! → summarize → cache write. One user-initiated search runs at a time; the
//! core performs no retries and no cancellation.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::cache::SummaryCache;
use crate::catalog::Wardrobe;
use crate::error::WearcastError;
use crate::models::WeatherSummary;
use crate::summarizer::{next_12_hours, summarize};
use crate::weather::WeatherGateway;

/// Length of the normalized postal-code prefix used as lookup key
const PREFIX_LEN: usize = 3;

/// Normalize a raw postal-code input to its uppercase 3-character prefix
///
/// Non-alphanumeric characters are stripped before validation.
///
/// # Errors
/// Returns a validation error when fewer than 3 alphanumeric characters
/// remain.
pub fn normalize_postal_code(input: &str) -> Result<String, WearcastError> {
    let cleaned: String = input.chars().filter(char::is_ascii_alphanumeric).collect();
    if cleaned.len() < PREFIX_LEN {
        return Err(WearcastError::validation(
            "postal code must contain at least 3 alphanumeric characters",
        ));
    }
    Ok(cleaned[..PREFIX_LEN].to_uppercase())
}

/// Weather outlook service combining gateway, cache and catalog
pub struct OutlookService<G> {
    gateway: G,
    cache: SummaryCache,
}

impl<G: WeatherGateway> OutlookService<G> {
    /// Create a new service around a gateway and an opened cache
    pub fn new(gateway: G, cache: SummaryCache) -> Self {
        Self { gateway, cache }
    }

    /// Produce the 12-hour outlook and clothing recommendation for a postal
    /// code, consulting the cache before going to the network.
    pub async fn outlook(
        &self,
        postal_code: &str,
        wardrobe: &Wardrobe,
    ) -> Result<WeatherSummary, WearcastError> {
        let prefix = normalize_postal_code(postal_code)?;

        if let Some(summary) = self.cache.get::<WeatherSummary>(&prefix).await? {
            info!("Serving cached summary for {}", prefix);
            return Ok(summary);
        }

        let location = self.gateway.resolve(&prefix).await?;
        let points = self
            .gateway
            .forecast(location.latitude, location.longitude)
            .await?;

        let now = Utc::now();
        let window = next_12_hours(&points, now);
        debug!(
            "Narrowed {} forecast points to {} within the outlook window",
            points.len(),
            window.len()
        );

        let summary = summarize(&window, now, wardrobe)?;

        // A failed cache write should not fail the search
        if let Err(e) = self.cache.put(&prefix, summary.clone()).await {
            warn!("Failed to cache summary for {}: {}", prefix, e);
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ForecastPoint;
    use crate::weather::{GeocodedLocation, WeatherGateway};
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    struct MockGateway {
        fail: bool,
        calls: AtomicUsize,
    }

    impl MockGateway {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl WeatherGateway for MockGateway {
        async fn resolve(&self, _postal_prefix: &str) -> Result<GeocodedLocation, WearcastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(WearcastError::api("geocoding unavailable"));
            }
            Ok(GeocodedLocation {
                latitude: 43.65,
                longitude: -79.38,
                name: "Toronto".to_string(),
                country: "CA".to_string(),
            })
        }

        async fn forecast(
            &self,
            _latitude: f64,
            _longitude: f64,
        ) -> Result<Vec<ForecastPoint>, WearcastError> {
            // Offset keeps the first point inside the outlook window, which
            // opens at the service's slightly later "now".
            let now = Utc::now() + Duration::minutes(1);
            Ok((0..4)
                .map(|i| ForecastPoint {
                    timestamp: now + Duration::hours(i * 3),
                    temperature: 12.0 + i as f32,
                    feels_like: 10.0 + i as f32,
                    condition: "Clear".to_string(),
                    description: "clear sky".to_string(),
                    icon: "01d".to_string(),
                    wind_speed: 3.0,
                })
                .collect())
        }
    }

    fn test_cache(dir: &TempDir) -> SummaryCache {
        SummaryCache::open(dir.path(), std::time::Duration::from_secs(3600)).unwrap()
    }

    #[test]
    fn test_normalize_postal_code() {
        assert_eq!(normalize_postal_code("m5v 2t6").unwrap(), "M5V");
        assert_eq!(normalize_postal_code("  90210 ").unwrap(), "902");
        assert_eq!(normalize_postal_code("K1A").unwrap(), "K1A");
    }

    #[test]
    fn test_normalize_postal_code_too_short() {
        let err = normalize_postal_code("a1").unwrap_err();
        assert!(matches!(err, WearcastError::Validation { .. }));

        let err = normalize_postal_code("--!").unwrap_err();
        assert!(matches!(err, WearcastError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_outlook_produces_summary() {
        let dir = TempDir::new().unwrap();
        let service = OutlookService::new(MockGateway::new(false), test_cache(&dir));
        let wardrobe = Wardrobe::builtin().unwrap();

        let summary = service.outlook("M5V 2T6", &wardrobe).await.unwrap();
        assert_eq!(summary.current_condition, "clear sky");
        assert_eq!(summary.min_temp, 12.0);
        assert_eq!(summary.max_temp, 15.0);
        assert!(!summary.recommendation.tops.is_empty());
    }

    #[tokio::test]
    async fn test_second_search_is_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let gateway = MockGateway::new(false);
        let service = OutlookService::new(gateway, test_cache(&dir));
        let wardrobe = Wardrobe::builtin().unwrap();

        let first = service.outlook("M5V", &wardrobe).await.unwrap();
        let second = service.outlook("m5v 2t6", &wardrobe).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(service.gateway.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_gateway_error_surfaces() {
        let dir = TempDir::new().unwrap();
        let service = OutlookService::new(MockGateway::new(true), test_cache(&dir));
        let wardrobe = Wardrobe::builtin().unwrap();

        let err = service.outlook("M5V", &wardrobe).await.unwrap_err();
        assert!(matches!(err, WearcastError::Api { .. }));
    }

    #[tokio::test]
    async fn test_invalid_postal_code_skips_gateway() {
        let dir = TempDir::new().unwrap();
        let gateway = MockGateway::new(false);
        let service = OutlookService::new(gateway, test_cache(&dir));
        let wardrobe = Wardrobe::builtin().unwrap();

        let err = service.outlook("x", &wardrobe).await.unwrap_err();
        assert!(matches!(err, WearcastError::Validation { .. }));
        assert_eq!(service.gateway.calls.load(Ordering::SeqCst), 0);
    }
}
