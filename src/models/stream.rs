// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-activity sample streams.
//!
//! A stream is a set of index-aligned channels: sample `i` of every present
//! channel describes the same instant. `distance` and `time` are mandatory and
//! cumulative; the other channels are optional and algorithms that need them
//! check for their presence.

use serde::{Deserialize, Serialize};

use crate::error::StreamError;

/// Validated, immutable set of parallel sample arrays for one activity.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleStream {
    distance: Vec<f64>,
    time: Vec<u32>,
    altitude: Option<Vec<f64>>,
    moving: Option<Vec<bool>>,
    latlng: Option<Vec<[f64; 2]>>,
}

impl SampleStream {
    /// Build a stream from its mandatory channels.
    ///
    /// Fails with `LengthMismatch` if the channels disagree on length and
    /// with `NonMonotonic` if either cumulative channel ever decreases.
    pub fn new(distance: Vec<f64>, time: Vec<u32>) -> Result<Self, StreamError> {
        check_len("time", distance.len(), time.len())?;
        if let Some(index) = first_decrease(&distance) {
            return Err(StreamError::NonMonotonic {
                channel: "distance",
                index,
            });
        }
        if let Some(index) = time.windows(2).position(|w| w[1] < w[0]) {
            return Err(StreamError::NonMonotonic {
                channel: "time",
                index: index + 1,
            });
        }

        Ok(Self {
            distance,
            time,
            altitude: None,
            moving: None,
            latlng: None,
        })
    }

    /// Assemble a stream whose invariants the caller already guarantees.
    pub(crate) fn from_parts(
        distance: Vec<f64>,
        time: Vec<u32>,
        altitude: Option<Vec<f64>>,
        moving: Option<Vec<bool>>,
        latlng: Option<Vec<[f64; 2]>>,
    ) -> Self {
        debug_assert_eq!(distance.len(), time.len());
        Self {
            distance,
            time,
            altitude,
            moving,
            latlng,
        }
    }

    pub fn with_altitude(mut self, altitude: Vec<f64>) -> Result<Self, StreamError> {
        check_len("altitude", self.len(), altitude.len())?;
        self.altitude = Some(altitude);
        Ok(self)
    }

    pub fn with_moving(mut self, moving: Vec<bool>) -> Result<Self, StreamError> {
        check_len("moving", self.len(), moving.len())?;
        self.moving = Some(moving);
        Ok(self)
    }

    pub fn with_latlng(mut self, latlng: Vec<[f64; 2]>) -> Result<Self, StreamError> {
        check_len("latlng", self.len(), latlng.len())?;
        self.latlng = Some(latlng);
        Ok(self)
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.distance.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distance.is_empty()
    }

    pub fn distance(&self) -> &[f64] {
        &self.distance
    }

    pub fn time(&self) -> &[u32] {
        &self.time
    }

    pub fn altitude(&self) -> Option<&[f64]> {
        self.altitude.as_deref()
    }

    pub fn moving(&self) -> Option<&[bool]> {
        self.moving.as_deref()
    }

    pub fn latlng(&self) -> Option<&[[f64; 2]]> {
        self.latlng.as_deref()
    }

    /// Distance covered between the first and last sample (meters).
    pub fn total_distance(&self) -> f64 {
        match (self.distance.first(), self.distance.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        }
    }

    /// Elapsed seconds between the first and last sample.
    pub fn total_time(&self) -> u32 {
        match (self.time.first(), self.time.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0,
        }
    }
}

fn check_len(channel: &'static str, expected: usize, actual: usize) -> Result<(), StreamError> {
    if expected != actual {
        return Err(StreamError::LengthMismatch {
            channel,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Index of the first sample that is lower than its predecessor (or NaN).
fn first_decrease(values: &[f64]) -> Option<usize> {
    if values.first().is_some_and(|v| v.is_nan()) {
        return Some(0);
    }
    values
        .windows(2)
        .position(|w| !(w[1] >= w[0]))
        .map(|i| i + 1)
}

// ─── Wire format ─────────────────────────────────────────────────────

/// One channel of a Strava stream set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamChannel<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub original_size: Option<usize>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default)]
    pub series_type: Option<String>,
}

/// Strava stream set as exported by the retrieval layer (`key_by_type=true`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawStreams {
    #[serde(default)]
    pub distance: Option<StreamChannel<f64>>,
    #[serde(default)]
    pub time: Option<StreamChannel<u32>>,
    #[serde(default)]
    pub altitude: Option<StreamChannel<f64>>,
    #[serde(default)]
    pub moving: Option<StreamChannel<bool>>,
    #[serde(default)]
    pub latlng: Option<StreamChannel<[f64; 2]>>,
}

impl TryFrom<RawStreams> for SampleStream {
    type Error = StreamError;

    fn try_from(raw: RawStreams) -> Result<Self, Self::Error> {
        let distance = raw.distance.ok_or(StreamError::MissingChannel("distance"))?;
        let time = raw.time.ok_or(StreamError::MissingChannel("time"))?;

        let mut stream = SampleStream::new(distance.data, time.data)?;
        if let Some(altitude) = raw.altitude {
            stream = stream.with_altitude(altitude.data)?;
        }
        if let Some(moving) = raw.moving {
            stream = stream.with_moving(moving.data)?;
        }
        if let Some(latlng) = raw.latlng {
            stream = stream.with_latlng(latlng.data)?;
        }
        Ok(stream)
    }
}
