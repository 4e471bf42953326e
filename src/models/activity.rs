// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava activity model: wire record and validated domain value.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RecordError;
use crate::models::effort::ActivityEffort;
use crate::models::stream::{RawStreams, SampleStream};
use crate::services::{effort, reducer};
use crate::time_utils::parse_local_datetime;

/// Sport type tag. Everything other than the three analysed types is kept
/// verbatim and treated uniformly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ActivityType {
    Run,
    Ride,
    Hike,
    Other(String),
}

impl ActivityType {
    /// Foot-based activities report pace instead of speed.
    pub fn is_foot_based(&self) -> bool {
        matches!(self, ActivityType::Run | ActivityType::Hike)
    }

    pub fn as_str(&self) -> &str {
        match self {
            ActivityType::Run => "Run",
            ActivityType::Ride => "Ride",
            ActivityType::Hike => "Hike",
            ActivityType::Other(tag) => tag,
        }
    }
}

impl From<String> for ActivityType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Run" => ActivityType::Run,
            "Ride" => ActivityType::Ride,
            "Hike" => ActivityType::Hike,
            _ => ActivityType::Other(tag),
        }
    }
}

impl From<&str> for ActivityType {
    fn from(tag: &str) -> Self {
        ActivityType::from(tag.to_string())
    }
}

impl From<ActivityType> for String {
    fn from(activity_type: ActivityType) -> Self {
        activity_type.as_str().to_string()
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity record as delivered by the retrieval layer (Strava field names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityRecord {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub activity_type: ActivityType,
    pub start_date_local: String,
    /// Distance in meters
    pub distance: f64,
    /// Elapsed time in seconds
    #[serde(default)]
    pub elapsed_time: u32,
    /// Moving time in seconds
    #[serde(default)]
    pub moving_time: u32,
    /// Elevation gain in meters
    #[serde(default)]
    pub total_elevation_gain: f64,
    /// Average speed in m/s
    #[serde(default)]
    pub average_speed: f64,
    /// Stream set, when it was downloaded
    #[serde(default)]
    pub stream: Option<RawStreams>,
}

/// One recorded session.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: u64,
    pub name: String,
    pub activity_type: ActivityType,
    pub start_date_local: NaiveDateTime,
    /// Distance in meters
    pub distance: f64,
    /// Elapsed time in seconds
    pub elapsed_time: u32,
    /// Moving time in seconds
    pub moving_time: u32,
    /// Elevation gain in meters
    pub total_elevation_gain: f64,
    /// Average speed in m/s
    pub average_speed: f64,
    pub stream: Option<SampleStream>,
}

impl TryFrom<ActivityRecord> for Activity {
    type Error = RecordError;

    fn try_from(record: ActivityRecord) -> Result<Self, Self::Error> {
        let id = record.id;
        let start_date_local =
            parse_local_datetime(&record.start_date_local).ok_or_else(|| {
                RecordError::InvalidDate {
                    id,
                    value: record.start_date_local.clone(),
                }
            })?;

        if !record.distance.is_finite() || record.distance < 0.0 {
            return Err(RecordError::InvalidDistance {
                id,
                distance: record.distance,
            });
        }

        let stream = record
            .stream
            .map(SampleStream::try_from)
            .transpose()
            .map_err(|source| RecordError::Stream { id, source })?;

        Ok(Activity {
            id,
            name: record.name,
            activity_type: record.activity_type,
            start_date_local,
            distance: record.distance,
            elapsed_time: record.elapsed_time,
            moving_time: record.moving_time,
            total_elevation_gain: record.total_elevation_gain,
            average_speed: record.average_speed,
            stream,
        })
    }
}

impl Activity {
    pub fn start_date(&self) -> NaiveDate {
        self.start_date_local.date()
    }

    pub fn year(&self) -> i32 {
        self.start_date_local.year()
    }

    /// Same activity with non-moving sections excised from its stream.
    pub fn without_non_moving(mut self) -> Self {
        self.stream = self.stream.as_ref().map(reducer::remove_non_moving);
        self
    }

    /// Fastest window covering at least `meters`.
    pub fn best_effort_for_distance(&self, meters: f64) -> Option<ActivityEffort> {
        effort::find_best_effort(self.id, self.stream.as_ref()?, meters)
    }

    /// Furthest window lasting at most `seconds`.
    pub fn best_distance_for_time(&self, seconds: u32) -> Option<ActivityEffort> {
        effort::find_best_distance_for_time(self.id, self.stream.as_ref()?, seconds)
    }

    /// Steepest window covering at least `meters`.
    pub fn steepest_climb(&self, meters: f64) -> Option<ActivityEffort> {
        effort::find_steepest_climb(self.id, self.stream.as_ref()?, meters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_json(start: &str, distance: f64) -> String {
        format!(
            r#"{{"id": 42, "name": "Morning Run", "type": "Run", "start_date_local": "{}",
                "distance": {}, "elapsed_time": 1500, "moving_time": 1450,
                "total_elevation_gain": 35.0, "average_speed": 3.4}}"#,
            start, distance
        )
    }

    #[test]
    fn test_activity_type_tags() {
        assert_eq!(ActivityType::from("Ride"), ActivityType::Ride);
        assert_eq!(
            ActivityType::from("NordicSki"),
            ActivityType::Other("NordicSki".to_string())
        );
        assert!(ActivityType::Hike.is_foot_based());
        assert!(!ActivityType::from("Swim").is_foot_based());
        assert_eq!(ActivityType::from("Swim").to_string(), "Swim");
    }

    #[test]
    fn test_record_to_activity() {
        let record: ActivityRecord =
            serde_json::from_str(&record_json("2021-03-05T07:30:00Z", 5000.0)).unwrap();
        let activity = Activity::try_from(record).unwrap();

        assert_eq!(activity.id, 42);
        assert_eq!(activity.activity_type, ActivityType::Run);
        assert_eq!(activity.year(), 2021);
        assert_eq!(activity.start_date().to_string(), "2021-03-05");
        assert!(activity.stream.is_none());
        assert!(activity.best_effort_for_distance(1000.0).is_none());
    }

    #[test]
    fn test_record_with_bad_date() {
        let record: ActivityRecord =
            serde_json::from_str(&record_json("yesterday", 5000.0)).unwrap();
        assert_eq!(
            Activity::try_from(record).unwrap_err(),
            RecordError::InvalidDate {
                id: 42,
                value: "yesterday".to_string()
            }
        );
    }

    #[test]
    fn test_record_with_negative_distance() {
        let record: ActivityRecord =
            serde_json::from_str(&record_json("2021-03-05T07:30:00Z", -1.0)).unwrap();
        assert!(matches!(
            Activity::try_from(record),
            Err(RecordError::InvalidDistance { id: 42, .. })
        ));
    }

    #[test]
    fn test_without_non_moving() {
        let json = r#"{"id": 7, "type": "Ride", "start_date_local": "2021-03-05T07:30:00Z",
            "distance": 30.0,
            "stream": {"distance": {"data": [0.0, 10.0, 10.0, 30.0]},
                       "time": {"data": [0, 5, 65, 75]},
                       "moving": {"data": [true, true, false, true]}}}"#;
        let record: ActivityRecord = serde_json::from_str(json).unwrap();
        let activity = Activity::try_from(record).unwrap().without_non_moving();

        let stream = activity.stream.as_ref().unwrap();
        assert_eq!(stream.distance(), &[0.0, 10.0, 30.0]);
        assert_eq!(stream.time(), &[0, 5, 15]);
        assert_eq!(activity.best_effort_for_distance(20.0).unwrap().seconds, 10);
    }
}
