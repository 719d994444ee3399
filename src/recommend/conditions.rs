//! Condition tagger: expands weather flags into matchable condition tags
//!
//! Tags are matching keys only, never display text. Rules are additive; the
//! result is the union of every applicable rule plus the raw condition label
//! included verbatim.

use crate::models::WeatherSignal;

/// Perceived temperature above which conditions count as hot, in Celsius
const HOT_THRESHOLD: f32 = 25.0;

/// Perceived temperature below which conditions count as cold, in Celsius
const COLD_THRESHOLD: f32 = 10.0;

/// Condition tags for the given signal, in rule order
#[must_use]
pub fn condition_tags(signal: &WeatherSignal) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    let mut push = |tag: &str| tags.push(tag.to_string());

    if signal.is_raining {
        push("rainy");
        push("light_rain");
        push("heavy_rain");
    }
    if signal.is_snowing {
        push("snow");
        push("freezing");
    }
    if signal.is_sunny {
        push("sunny");
        push("clear");
        push("bright");
    }
    if signal.is_windy {
        push("windy");
    }

    if signal.feels_like > HOT_THRESHOLD {
        push("hot");
    } else if signal.feels_like < COLD_THRESHOLD {
        push("cold");
    } else {
        push("mild");
    }

    if !signal.condition_label.is_empty() {
        tags.push(signal.condition_label.clone());
    }

    tags
}
