// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Best-effort window search over a sample stream.
//!
//! The speed searches are a two-pointer pass over the cumulative
//! `distance`/`time` channels. Because both channels are non-decreasing, the
//! left edge never has to move backwards as the right edge advances, so they
//! are linear in the number of samples. Gradient is not monotonic in the
//! window length, so the climb search checks every qualifying left edge.

use crate::models::{ActivityEffort, SampleStream};

/// Fastest window covering at least `target_m` meters.
///
/// For each right edge the left edge is pulled as far forward as the target
/// allows, which is the quickest window ending there. If that window has no
/// elapsed time, the latest earlier left edge with a lower timestamp is used
/// instead. The first window with the lowest elapsed time wins.
///
/// Returns `None` if the stream is shorter than the target, has fewer than two
/// samples, or the target is not a positive number.
pub fn find_best_effort(
    activity_id: u64,
    stream: &SampleStream,
    target_m: f64,
) -> Option<ActivityEffort> {
    if !is_positive(target_m) || stream.len() < 2 || stream.total_distance() < target_m {
        return None;
    }

    let distance = stream.distance();
    let time = stream.time();
    let mut best: Option<(usize, usize)> = None;
    let mut best_seconds = u32::MAX;
    let mut start = 0;

    for end in 1..stream.len() {
        if distance[end] - distance[start] < target_m {
            continue;
        }
        while start + 1 < end && distance[end] - distance[start + 1] >= target_m {
            start += 1;
        }

        let mut first = start;
        while first > 0 && time[first] == time[end] {
            first -= 1;
        }

        let seconds = time[end] - time[first];
        if seconds > 0 && seconds < best_seconds {
            best_seconds = seconds;
            best = Some((first, end));
        }
    }

    best.map(|(start, end)| window(activity_id, stream, start, end))
}

/// Furthest window lasting at most `seconds`, for streams that last at
/// least that long.
///
/// For each right edge the left edge is the earliest sample still within the
/// duration, which is the longest window ending there. First maximum wins.
pub fn find_best_distance_for_time(
    activity_id: u64,
    stream: &SampleStream,
    seconds: u32,
) -> Option<ActivityEffort> {
    if seconds == 0 || stream.len() < 2 || stream.total_time() < seconds {
        return None;
    }

    let distance = stream.distance();
    let time = stream.time();
    let mut best: Option<(usize, usize)> = None;
    let mut best_distance = 0.0;
    let mut start = 0;

    for end in 1..stream.len() {
        while time[end] - time[start] > seconds {
            start += 1;
        }
        if start == end || time[end] == time[start] {
            continue;
        }

        let covered = distance[end] - distance[start];
        if covered > best_distance {
            best_distance = covered;
            best = Some((start, end));
        }
    }

    best.map(|(start, end)| window(activity_id, stream, start, end))
}

/// Steepest window covering at least `min_distance_m` meters.
///
/// For each right edge every left edge far enough back is tried, keeping the
/// window with the highest net altitude change per meter. The first maximum
/// wins. Flat or descending streams still produce a result with a zero or
/// negative gradient. Requires the altitude channel.
pub fn find_steepest_climb(
    activity_id: u64,
    stream: &SampleStream,
    min_distance_m: f64,
) -> Option<ActivityEffort> {
    let altitude = stream.altitude()?;
    if !is_positive(min_distance_m)
        || stream.len() < 2
        || stream.total_distance() < min_distance_m
    {
        return None;
    }

    let distance = stream.distance();
    let mut best: Option<(usize, usize)> = None;
    let mut best_gradient = f64::NEG_INFINITY;
    let mut last_start = 0;

    for end in 1..stream.len() {
        if distance[end] - distance[last_start] < min_distance_m {
            continue;
        }
        while last_start + 1 < end && distance[end] - distance[last_start + 1] >= min_distance_m {
            last_start += 1;
        }

        for start in 0..=last_start {
            let gradient = (altitude[end] - altitude[start]) / (distance[end] - distance[start]);
            if gradient.is_finite() && gradient > best_gradient {
                best_gradient = gradient;
                best = Some((start, end));
            }
        }
    }

    best.map(|(start, end)| window(activity_id, stream, start, end))
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn window(activity_id: u64, stream: &SampleStream, start: usize, end: usize) -> ActivityEffort {
    ActivityEffort {
        activity_id,
        distance: stream.distance()[end] - stream.distance()[start],
        seconds: stream.time()[end] - stream.time()[start],
        altitude: stream
            .altitude()
            .map(|a| a[end] - a[start])
            .unwrap_or(0.0),
        ix_start: start,
        ix_end: end,
    }
}
