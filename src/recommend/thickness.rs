//! Thickness selector: maps temperature readings to acceptable warmth levels
//!
//! The perceived (feels-like) temperature drives a base band of thickness
//! levels; a large daily swing widens the band one level in each direction,
//! and a large gap between ambient and perceived temperature fills any holes
//! in the band. All rules are additive and the result never leaves 0..=5.

use crate::models::{MAX_THICKNESS, ThicknessLevel};

/// Daily swing above which the band is widened, in Celsius
const SWING_WIDENING_THRESHOLD: f32 = 10.0;

/// Ambient/perceived gap above which the band is densified, in Celsius
const FEELS_LIKE_GAP_THRESHOLD: f32 = 5.0;

/// Acceptable thickness levels for the given readings, sorted ascending and
/// deduplicated.
#[must_use]
pub fn recommended_thickness(
    actual_temp: f32,
    feels_like: f32,
    max_temp: f32,
    min_temp: f32,
) -> Vec<ThicknessLevel> {
    let mut levels = base_levels(feels_like).to_vec();

    // Widen for a large daily swing: one lighter and one thicker option,
    // where the bounds allow.
    if max_temp - min_temp > SWING_WIDENING_THRESHOLD {
        let lightest = *levels.iter().min().unwrap_or(&0);
        let thickest = *levels.iter().max().unwrap_or(&MAX_THICKNESS);
        if lightest > 0 {
            levels.push(lightest - 1);
        }
        if thickest < MAX_THICKNESS {
            levels.push(thickest + 1);
        }
    }

    // When perceived temperature strays far from the ambient reading, fill
    // any gaps between the selected levels.
    if (actual_temp - feels_like).abs() > FEELS_LIKE_GAP_THRESHOLD {
        let mut sorted = levels.clone();
        sorted.sort_unstable();
        sorted.dedup();
        for pair in sorted.windows(2) {
            for intermediate in (pair[0] + 1)..pair[1] {
                levels.push(intermediate);
            }
        }
    }

    levels.sort_unstable();
    levels.dedup();
    levels
}

/// Base thickness band by perceived temperature. Breakpoints are inclusive on
/// the lower bound of each band.
fn base_levels(feels_like: f32) -> &'static [ThicknessLevel] {
    if feels_like >= 30.0 {
        &[0]
    } else if feels_like >= 25.0 {
        &[0, 1]
    } else if feels_like >= 20.0 {
        &[1, 2]
    } else if feels_like >= 15.0 {
        &[2, 3]
    } else if feels_like >= 10.0 {
        &[2, 3, 4]
    } else if feels_like >= 5.0 {
        &[3, 4]
    } else if feels_like >= 0.0 {
        &[3, 4, 5]
    } else {
        &[4, 5]
    }
}
