//! Forecast summarizer: reduces forecast points to one near-term summary
//!
//! The summarizer takes whatever window the caller already narrowed (see
//! [`next_12_hours`]) and derives the current reading, the true temperature
//! extrema, the distinct condition changes, and the clothing recommendation
//! for the worst point in the window.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;
use tracing::debug;

use crate::catalog::Wardrobe;
use crate::error::WearcastError;
use crate::models::{ConditionChange, ForecastPoint, WeatherSignal, WeatherSummary};
use crate::recommend;

/// Length of the near-term outlook window in hours
pub const OUTLOOK_HOURS: i64 = 12;

/// Narrow raw forecast points to those within 0..=12 hours of `now`,
/// inclusive on both bounds, sorted ascending by timestamp.
#[must_use]
pub fn next_12_hours(points: &[ForecastPoint], now: DateTime<Utc>) -> Vec<ForecastPoint> {
    let end = now + Duration::hours(OUTLOOK_HOURS);
    let mut window: Vec<ForecastPoint> = points
        .iter()
        .filter(|point| point.timestamp >= now && point.timestamp <= end)
        .cloned()
        .collect();
    window.sort_by_key(|point| point.timestamp);
    window
}

/// Summarize a forecast window into one [`WeatherSummary`]
///
/// # Errors
/// Returns a validation error when `points` is empty.
pub fn summarize(
    points: &[ForecastPoint],
    now: DateTime<Utc>,
    wardrobe: &Wardrobe,
) -> Result<WeatherSummary, WearcastError> {
    let current = nearest_to(points, now)
        .ok_or_else(|| WearcastError::validation("no forecast data for the requested window"))?;

    let min_temp = points
        .iter()
        .map(|p| p.temperature)
        .fold(f32::INFINITY, f32::min);
    let max_temp = points
        .iter()
        .map(|p| p.temperature)
        .fold(f32::NEG_INFINITY, f32::max);

    let condition_changes = distinct_conditions(points);

    // Worst-point priority rule: the first point whose primary condition is
    // Rain, Snow or Thunderstorm drives the recommendation; with no adverse
    // point the current reading does.
    let worst = points.iter().find(|p| p.is_adverse()).unwrap_or(current);
    debug!(
        condition = %worst.condition,
        timestamp = %worst.timestamp,
        "Selected representative point for recommendation"
    );

    let signal = WeatherSignal::from_point(worst, min_temp, max_temp);
    let recommendation = recommend::recommend(wardrobe, &signal);

    Ok(WeatherSummary {
        current_temp: current.temperature,
        feels_like: current.feels_like,
        min_temp,
        max_temp,
        current_condition: current.description.clone(),
        current_icon: current.icon.clone(),
        time_range: time_range_label(now),
        condition_changes,
        recommendation,
    })
}

/// Point with the smallest absolute timestamp distance to `now`; ties broken
/// by first occurrence in input order.
fn nearest_to(points: &[ForecastPoint], now: DateTime<Utc>) -> Option<&ForecastPoint> {
    points.iter().fold(None, |best, candidate| match best {
        None => Some(candidate),
        Some(current_best) => {
            let best_distance = (current_best.timestamp - now).abs();
            let candidate_distance = (candidate.timestamp - now).abs();
            if candidate_distance < best_distance {
                Some(candidate)
            } else {
                Some(current_best)
            }
        }
    })
}

/// Distinct condition descriptions in first-seen order; when a description
/// recurs with a different icon, the first-seen icon wins.
fn distinct_conditions(points: &[ForecastPoint]) -> Vec<ConditionChange> {
    let mut seen = HashSet::new();
    let mut changes = Vec::new();
    for point in points {
        if seen.insert(point.description.clone()) {
            changes.push(ConditionChange {
                description: point.description.clone(),
                icon: point.icon.clone(),
            });
        }
    }
    changes
}

/// Label for the covered window, e.g. "Now until 08:30 PM"
fn time_range_label(now: DateTime<Utc>) -> String {
    let end = now + Duration::hours(OUTLOOK_HOURS);
    format!("Now until {}", end.format("%I:%M %p"))
}
