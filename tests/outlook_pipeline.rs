//! Integration tests for the full outlook pipeline
//!
//! Exercises normalize → narrow → summarize → recommend through the public
//! API with synthetic forecast points, without touching the network.

use chrono::{Duration, TimeZone, Utc};

use wearcast::models::{Category, ForecastPoint};
use wearcast::{Wardrobe, next_12_hours, normalize_postal_code, summarize};

fn point(
    hour_offset: i64,
    temperature: f32,
    feels_like: f32,
    condition: &str,
    description: &str,
    wind_speed: f32,
) -> ForecastPoint {
    let base = Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap();
    ForecastPoint {
        timestamp: base + Duration::hours(hour_offset),
        temperature,
        feels_like,
        condition: condition.to_string(),
        description: description.to_string(),
        icon: "04d".to_string(),
        wind_speed,
    }
}

#[test]
fn rainy_autumn_day_end_to_end() {
    let now = Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap();
    let wardrobe = Wardrobe::builtin().unwrap();

    let prefix = normalize_postal_code("m5v 2t6").unwrap();
    assert_eq!(prefix, "M5V");

    // A raw gateway response: some points beyond the window, one before it
    let raw = vec![
        point(-3, 9.0, 7.0, "Clouds", "overcast clouds", 4.0),
        point(0, 8.0, 6.0, "Clouds", "overcast clouds", 4.0),
        point(3, 9.5, 7.5, "Rain", "light rain", 6.0),
        point(6, 10.0, 8.0, "Rain", "light rain", 6.5),
        point(9, 7.0, 5.0, "Clouds", "broken clouds", 5.0),
        point(15, 5.0, 3.0, "Snow", "light snow", 4.0),
    ];

    let window = next_12_hours(&raw, now);
    assert_eq!(window.len(), 4);

    let summary = summarize(&window, now, &wardrobe).unwrap();

    // Current reading is the nearest point, extrema span the whole window
    assert_eq!(summary.current_temp, 8.0);
    assert_eq!(summary.min_temp, 7.0);
    assert_eq!(summary.max_temp, 10.0);

    // Three distinct descriptions within the window
    let descriptions: Vec<&str> = summary
        .condition_changes
        .iter()
        .map(|c| c.description.as_str())
        .collect();
    assert_eq!(
        descriptions,
        vec!["overcast clouds", "light rain", "broken clouds"]
    );

    // The first rain point drives the recommendation: cold, rainy, windy
    let rec = &summary.recommendation;
    assert!(rec.description.contains("rainy"));
    assert!(rec.description.contains("windy"));
    assert!(!rec.description.contains("snowing"));

    // Every recommended item satisfies the filter's invariants
    for (category, names) in [
        (Category::Top, &rec.tops),
        (Category::Bottom, &rec.bottoms),
        (Category::Accessory, &rec.accessories),
    ] {
        for name in names {
            let item = wardrobe.lookup(category, name).unwrap();
            assert_eq!(item.category, category);
        }
    }

    // Feels-like 7.5°C selects the mid-weight band; tops come back in
    // layering order
    assert_eq!(rec.tops, vec!["Sweater", "Down Jacket"]);
    assert!(rec.accessories.contains(&"Beanie".to_string()));
    assert!(rec.accessories.contains(&"Gloves".to_string()));
}

#[test]
fn hot_clear_day_end_to_end() {
    let now = Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap();
    let wardrobe = Wardrobe::builtin().unwrap();

    let raw: Vec<ForecastPoint> = (0..5)
        .map(|i| point(i * 3, 31.0 + i as f32 * 0.5, 33.0, "Clear", "clear sky", 2.0))
        .collect();

    let window = next_12_hours(&raw, now);
    let summary = summarize(&window, now, &wardrobe).unwrap();

    let rec = &summary.recommendation;
    assert_eq!(rec.tops, vec!["T-Shirt"]);
    assert_eq!(rec.bottoms, vec!["Shorts"]);
    assert!(rec.accessories.contains(&"Sunglasses".to_string()));
    assert!(rec.layering_advice.is_none());
}

#[test]
fn summaries_are_deterministic() {
    let now = Utc.with_ymd_and_hms(2024, 11, 2, 8, 0, 0).unwrap();
    let wardrobe = Wardrobe::builtin().unwrap();

    let raw = vec![
        point(0, 3.0, -1.0, "Snow", "light snow", 7.0),
        point(3, 2.0, -2.0, "Snow", "snow", 7.5),
        point(6, 1.0, -3.0, "Clouds", "overcast clouds", 6.0),
    ];

    let window = next_12_hours(&raw, now);
    let first = summarize(&window, now, &wardrobe).unwrap();
    let second = summarize(&window, now, &wardrobe).unwrap();
    assert_eq!(first, second);

    // Snowy and windy: heavy tops sorted by layering order
    assert!(first.recommendation.tops.len() > 1);
    let positions: Vec<u8> = first
        .recommendation
        .tops
        .iter()
        .map(|name| {
            wardrobe
                .lookup(Category::Top, name)
                .unwrap()
                .layering_position()
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] <= w[1]));
}
