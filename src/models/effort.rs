// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! A sub-window extracted from an activity stream.

use serde::Serialize;

use crate::models::activity::ActivityType;
use crate::services::metrics;

/// An effort within an activity.
///
/// `ix_start` and `ix_end` index the stream the effort was found in;
/// `distance` and `seconds` are the deltas between those two samples.
/// Speed, pace and gradient are derived on every call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEffort {
    pub activity_id: u64,
    /// Meters covered
    pub distance: f64,
    /// Elapsed seconds
    pub seconds: u32,
    /// Net altitude change in meters
    pub altitude: f64,
    pub ix_start: usize,
    pub ix_end: usize,
}

impl ActivityEffort {
    /// Speed (km/h) or pace (mm:ss) without unit.
    pub fn speed(&self, activity_type: &ActivityType) -> String {
        metrics::speed_value(self.distance, self.seconds, activity_type)
    }

    /// Speed or pace with unit, e.g. `32.40 km/h` or `04:10/km`.
    pub fn formatted_speed(&self, activity_type: &ActivityType) -> String {
        metrics::format_speed(self.distance, self.seconds, activity_type)
    }

    /// Gradient in percent, e.g. `4.25`.
    pub fn gradient(&self) -> String {
        format!("{:.2}", metrics::gradient_percent(self.altitude, self.distance))
    }

    /// Gradient with unit, e.g. `4.25%`.
    pub fn formatted_gradient(&self) -> String {
        metrics::format_gradient(self.altitude, self.distance)
    }
}
