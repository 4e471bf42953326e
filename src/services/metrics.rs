// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Speed, pace and gradient derived from a (distance, seconds, altitude)
//! triple.
//!
//! Callers must not pass zero distance or zero seconds; the effort finders
//! never produce such windows.

use crate::models::ActivityType;

/// Speed in km/h.
pub fn speed_kmh(distance_m: f64, seconds: u32) -> f64 {
    debug_assert!(seconds > 0, "speed of a zero-duration window");
    distance_m / seconds as f64 * 3.6
}

/// Pace in seconds per kilometer.
pub fn pace_seconds_per_km(distance_m: f64, seconds: u32) -> f64 {
    debug_assert!(distance_m > 0.0, "pace of a zero-distance window");
    seconds as f64 * 1000.0 / distance_m
}

/// Gradient in percent.
pub fn gradient_percent(altitude_m: f64, distance_m: f64) -> f64 {
    debug_assert!(distance_m > 0.0, "gradient of a zero-distance window");
    // `+ 0.0` folds a negative zero so flat windows print as 0.00
    100.0 * altitude_m / distance_m + 0.0
}

/// Pace as `mm:ss`; minutes are not wrapped into hours.
pub fn format_pace(seconds_per_km: f64) -> String {
    let total = seconds_per_km.max(0.0).round() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

/// Speed or pace value without unit.
pub fn speed_value(distance_m: f64, seconds: u32, activity_type: &ActivityType) -> String {
    if activity_type.is_foot_based() {
        format_pace(pace_seconds_per_km(distance_m, seconds))
    } else {
        format!("{:.2}", speed_kmh(distance_m, seconds))
    }
}

/// Speed or pace with unit: `mm:ss/km` for foot-based types, `x.xx km/h`
/// otherwise.
pub fn format_speed(distance_m: f64, seconds: u32, activity_type: &ActivityType) -> String {
    if activity_type.is_foot_based() {
        format!("{}/km", speed_value(distance_m, seconds, activity_type))
    } else {
        format!("{} km/h", speed_value(distance_m, seconds, activity_type))
    }
}

/// Gradient with a trailing percent sign, e.g. `4.25%`.
pub fn format_gradient(altitude_m: f64, distance_m: f64) -> String {
    format!("{:.2}%", gradient_percent(altitude_m, distance_m))
}
