// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity loading from the retrieval layer's JSON export.
//!
//! Records with an unusable date or distance are skipped, and streams with
//! bad data are dropped while the activity itself is kept. A stream whose
//! channels disagree on length aborts the load.

use std::path::Path;

use crate::error::{AppError, RecordError, Result};
use crate::models::{Activity, ActivityRecord, SampleStream};

/// Read and assemble activities from a JSON file holding an array of records.
pub fn load_activities(path: &Path) -> Result<Vec<Activity>> {
    tracing::info!(path = %path.display(), "Loading activities");
    let json = std::fs::read_to_string(path).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_activities(&json)
}

/// Parse a JSON array of activity records.
pub fn parse_activities(json: &str) -> Result<Vec<Activity>> {
    let records: Vec<ActivityRecord> = serde_json::from_str(json)?;
    assemble(records)
}

/// Convert wire records into activities sorted by local start date.
pub fn assemble(records: Vec<ActivityRecord>) -> Result<Vec<Activity>> {
    let total = records.len();
    let mut activities = Vec::with_capacity(total);

    for mut record in records {
        let id = record.id;
        let raw_stream = record.stream.take();

        let mut activity = match Activity::try_from(record) {
            Ok(activity) => activity,
            Err(e) => {
                tracing::warn!(activity_id = id, error = %e, "Skipping activity");
                continue;
            }
        };

        if let Some(raw) = raw_stream {
            match SampleStream::try_from(raw) {
                Ok(stream) => activity.stream = Some(stream),
                Err(source) => {
                    let err = RecordError::Stream { id, source };
                    if err.is_structural() {
                        return Err(err.into());
                    }
                    tracing::warn!(activity_id = id, error = %err, "Dropping activity stream");
                }
            }
        }

        activities.push(activity);
    }

    activities.sort_by_key(|a| a.start_date_local);

    tracing::info!(
        loaded = activities.len(),
        skipped = total - activities.len(),
        with_stream = activities.iter().filter(|a| a.stream.is_some()).count(),
        "Activities assembled"
    );
    Ok(activities)
}

/// Keep only activities that started in `year`.
pub fn select_year(activities: Vec<Activity>, year: i32) -> Vec<Activity> {
    let before = activities.len();
    let selected: Vec<Activity> = activities
        .into_iter()
        .filter(|a| a.year() == year)
        .collect();
    tracing::debug!(year, before, after = selected.len(), "Filtered activities by year");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StreamError;

    #[test]
    fn test_sorted_by_start_date() {
        let json = r#"[
            {"id": 2, "type": "Ride", "start_date_local": "2021-06-02T08:00:00Z", "distance": 20000.0},
            {"id": 1, "type": "Run", "start_date_local": "2021-06-01T08:00:00Z", "distance": 5000.0}
        ]"#;
        let activities = parse_activities(json).unwrap();
        let ids: Vec<u64> = activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let json = r#"[
            {"id": 1, "type": "Run", "start_date_local": "not a date", "distance": 5000.0},
            {"id": 2, "type": "Run", "start_date_local": "2021-06-01T08:00:00Z", "distance": -3.0},
            {"id": 3, "type": "Run", "start_date_local": "2021-06-01T08:00:00Z", "distance": 5000.0}
        ]"#;
        let activities = parse_activities(json).unwrap();
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].id, 3);
    }

    #[test]
    fn test_non_monotonic_stream_is_dropped() {
        let json = r#"[
            {"id": 1, "type": "Run", "start_date_local": "2021-06-01T08:00:00Z", "distance": 20.0,
             "stream": {"distance": {"data": [0.0, 20.0, 10.0]}, "time": {"data": [0, 5, 10]}}}
        ]"#;
        let activities = parse_activities(json).unwrap();
        assert_eq!(activities.len(), 1);
        assert!(activities[0].stream.is_none());
    }

    #[test]
    fn test_length_mismatch_aborts() {
        let json = r#"[
            {"id": 9, "type": "Run", "start_date_local": "2021-06-01T08:00:00Z", "distance": 20.0,
             "stream": {"distance": {"data": [0.0, 20.0]}, "time": {"data": [0, 5, 10]}}}
        ]"#;
        let err = parse_activities(json).unwrap_err();
        assert!(matches!(
            err,
            AppError::Record(RecordError::Stream {
                id: 9,
                source: StreamError::LengthMismatch { .. }
            })
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(parse_activities("{"), Err(AppError::Json(_))));
    }

    #[test]
    fn test_select_year() {
        let json = r#"[
            {"id": 1, "type": "Run", "start_date_local": "2020-12-31T23:00:00Z", "distance": 1.0},
            {"id": 2, "type": "Run", "start_date_local": "2021-01-01T06:00:00Z", "distance": 1.0}
        ]"#;
        let selected = select_year(parse_activities(json).unwrap(), 2021);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, 2);
    }
}
