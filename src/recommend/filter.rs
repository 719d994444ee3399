//! Recommendation filter: matches the wardrobe catalog against a weather signal
//!
//! An item is recommended iff its thickness is in the selected band AND its
//! suitable conditions intersect the active tag set. An empty category is a
//! valid outcome, not an error.

use tracing::debug;

use super::conditions::condition_tags;
use super::thickness::recommended_thickness;
use crate::catalog::Wardrobe;
use crate::models::{Category, ClothingItem, ClothingRecommendation, WeatherSignal};

/// Daily swing above which packing advice is added, in Celsius
const SWING_ADVICE_THRESHOLD: f32 = 10.0;

/// Produce a categorized clothing recommendation for the given signal
#[must_use]
pub fn recommend(wardrobe: &Wardrobe, signal: &WeatherSignal) -> ClothingRecommendation {
    let thickness_band = recommended_thickness(
        signal.temperature,
        signal.feels_like,
        signal.max_temp,
        signal.min_temp,
    );
    let tags = condition_tags(signal);
    debug!(?thickness_band, ?tags, "Filtering wardrobe");

    let mut tops = filter_category(wardrobe, Category::Top, &thickness_band, &tags);
    // Stable sort keeps catalog order for tops sharing a layering position
    tops.sort_by_key(|item| item.layering_position());

    let bottoms = filter_category(wardrobe, Category::Bottom, &thickness_band, &tags);
    let accessories = filter_category(wardrobe, Category::Accessory, &thickness_band, &tags);

    let layering_advice = layering_advice(signal, tops.len());

    ClothingRecommendation {
        tops: names(&tops),
        bottoms: names(&bottoms),
        accessories: names(&accessories),
        description: describe(signal),
        layering_advice,
    }
}

fn filter_category<'a>(
    wardrobe: &'a Wardrobe,
    category: Category,
    thickness_band: &[u8],
    tags: &[String],
) -> Vec<&'a ClothingItem> {
    wardrobe
        .items(category)
        .iter()
        .filter(|item| {
            thickness_band.contains(&item.thickness)
                && item
                    .suitable_conditions
                    .iter()
                    .any(|condition| tags.contains(condition))
        })
        .collect()
}

fn names(items: &[&ClothingItem]) -> Vec<String> {
    items.iter().map(|item| item.name.clone()).collect()
}

/// Fixed-template sentence embedding the temperatures and active flags in a
/// fixed order, with the trailing separator trimmed.
fn describe(signal: &WeatherSignal) -> String {
    let mut description = format!(
        "Weather conditions: {}°C (feels like {}°C), Range: {}°C to {}°C, ",
        signal.temperature, signal.feels_like, signal.min_temp, signal.max_temp
    );
    if signal.is_raining {
        description.push_str("rainy, ");
    }
    if signal.is_snowing {
        description.push_str("snowing, ");
    }
    if signal.is_sunny {
        description.push_str("sunny, ");
    }
    if signal.is_windy {
        description.push_str("windy, ");
    }
    description
        .strip_suffix(", ")
        .unwrap_or(&description)
        .to_string()
}

/// Layering advice clauses are evaluated independently and concatenated when
/// both apply.
fn layering_advice(signal: &WeatherSignal, top_count: usize) -> Option<String> {
    let mut advice = String::new();
    if top_count > 1 {
        advice.push_str("Consider layering these items for better insulation. ");
    }
    if signal.temperature_swing() > SWING_ADVICE_THRESHOLD {
        advice.push_str(
            "Due to significant temperature variation throughout the day, \
             consider bringing extra layers that you can add or remove as needed.",
        );
    }

    let advice = advice.trim_end().to_string();
    if advice.is_empty() { None } else { Some(advice) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Wardrobe;
    use crate::models::WeatherSignal;
    use crate::recommend::{condition_tags, recommended_thickness};

    fn signal(feels_like: f32) -> WeatherSignal {
        WeatherSignal {
            temperature: feels_like,
            feels_like,
            min_temp: feels_like,
            max_temp: feels_like,
            is_raining: false,
            is_snowing: false,
            is_sunny: false,
            is_windy: false,
            condition_label: String::new(),
        }
    }

    fn test_wardrobe() -> Wardrobe {
        Wardrobe::builtin().unwrap()
    }

    #[test]
    fn every_result_satisfies_both_predicates() {
        let wardrobe = test_wardrobe();
        let signal = WeatherSignal {
            is_raining: true,
            is_windy: true,
            ..signal(8.0)
        };
        let band = recommended_thickness(8.0, 8.0, 8.0, 8.0);
        let tags = condition_tags(&signal);
        let rec = recommend(&wardrobe, &signal);

        for (category, selected) in [
            (Category::Top, &rec.tops),
            (Category::Bottom, &rec.bottoms),
            (Category::Accessory, &rec.accessories),
        ] {
            for name in selected {
                let item = wardrobe.lookup(category, name).unwrap();
                assert!(band.contains(&item.thickness), "{name} fails thickness");
                assert!(
                    item.suitable_conditions.iter().any(|c| tags.contains(c)),
                    "{name} fails condition intersection"
                );
            }
        }
    }

    #[test]
    fn rejected_items_fail_a_predicate() {
        let wardrobe = test_wardrobe();
        let signal = signal(32.0);
        let band = recommended_thickness(32.0, 32.0, 32.0, 32.0);
        let tags = condition_tags(&signal);
        let rec = recommend(&wardrobe, &signal);

        for item in wardrobe.items(Category::Top) {
            if !rec.tops.contains(&item.name) {
                let thickness_ok = band.contains(&item.thickness);
                let conditions_ok = item.suitable_conditions.iter().any(|c| tags.contains(c));
                assert!(!(thickness_ok && conditions_ok), "{} wrongly excluded", item.name);
            }
        }
    }

    #[test]
    fn tops_are_ordered_by_layering() {
        let wardrobe = test_wardrobe();
        // Cold and windy: multiple tops should qualify
        let rec = recommend(
            &wardrobe,
            &WeatherSignal {
                is_windy: true,
                ..signal(2.0)
            },
        );
        assert!(rec.tops.len() > 1);

        let positions: Vec<u8> = rec
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

    #[test]
    fn empty_category_is_valid() {
        // A wardrobe with only heavy cold-weather gear has nothing to offer
        // on a hot day; that is a valid outcome, not an error.
        let wardrobe = Wardrobe::from_json(
            r#"{"clothing":{
                "tops":{"coat":{"name":"Winter Coat","thickness":5,
                    "suitable_conditions":["cold","freezing"]}},
                "bottoms":{},
                "accessories":{}}}"#,
        )
        .unwrap();
        let rec = recommend(
            &wardrobe,
            &WeatherSignal {
                is_sunny: true,
                ..signal(31.0)
            },
        );
        assert!(rec.is_empty());
    }

    #[test]
    fn recommendation_is_idempotent() {
        let wardrobe = test_wardrobe();
        let signal = WeatherSignal {
            is_raining: true,
            is_windy: true,
            min_temp: 4.0,
            max_temp: 16.0,
            ..signal(9.0)
        };
        let first = recommend(&wardrobe, &signal);
        let second = recommend(&wardrobe, &signal);
        assert_eq!(first, second);
    }

    #[test]
    fn description_has_fixed_flag_order() {
        let rec = recommend(
            &test_wardrobe(),
            &WeatherSignal {
                temperature: 15.0,
                feels_like: 12.0,
                min_temp: 10.0,
                max_temp: 20.0,
                is_raining: true,
                is_snowing: false,
                is_sunny: false,
                is_windy: true,
                condition_label: String::new(),
            },
        );
        assert_eq!(
            rec.description,
            "Weather conditions: 15°C (feels like 12°C), Range: 10°C to 20°C, rainy, windy"
        );
    }

    #[test]
    fn description_without_flags_has_no_trailing_separator() {
        let rec = recommend(&test_wardrobe(), &signal(18.0));
        assert!(!rec.description.ends_with(", "));
        assert!(rec.description.ends_with("18°C"));
    }

    #[test]
    fn layering_advice_clauses_are_independent() {
        let wardrobe = test_wardrobe();

        // Multiple tops, small swing: layering clause only
        let rec = recommend(
            &wardrobe,
            &WeatherSignal {
                is_windy: true,
                ..signal(2.0)
            },
        );
        let advice = rec.layering_advice.unwrap();
        assert!(advice.contains("layering"));
        assert!(!advice.contains("temperature variation"));

        // Large swing adds the packing clause
        let rec = recommend(
            &wardrobe,
            &WeatherSignal {
                is_windy: true,
                min_temp: -4.0,
                max_temp: 8.0,
                ..signal(2.0)
            },
        );
        let advice = rec.layering_advice.unwrap();
        assert!(advice.contains("layering"));
        assert!(advice.contains("temperature variation"));
    }

    #[test]
    fn no_advice_for_single_top_and_small_swing() {
        let wardrobe = test_wardrobe();
        // Hot and clear: only the T-Shirt qualifies
        let rec = recommend(
            &wardrobe,
            &WeatherSignal {
                is_sunny: true,
                ..signal(32.0)
            },
        );
        assert_eq!(rec.tops, vec!["T-Shirt"]);
        assert!(rec.layering_advice.is_none());
    }
}
