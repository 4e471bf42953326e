// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Non-moving section removal.

use rayon::prelude::*;

use crate::models::{Activity, SampleStream};

/// Excise every non-moving sample from a stream.
///
/// The distance and time deltas leading into a non-moving sample are
/// dropped, so later samples are re-based as if the pause never happened.
/// Altitude and position samples taken while stopped are discarded.
/// Streams without a `moving` channel are returned unchanged; the result
/// is all-moving, so applying this twice is the same as applying it once.
pub fn remove_non_moving(stream: &SampleStream) -> SampleStream {
    let Some(moving) = stream.moving() else {
        return stream.clone();
    };
    if moving.iter().all(|m| *m) {
        return stream.clone();
    }

    let distance = stream.distance();
    let time = stream.time();
    let kept = moving.iter().filter(|m| **m).count();

    let mut new_distance = Vec::with_capacity(kept);
    let mut new_time = Vec::with_capacity(kept);
    let mut acc_distance = distance.first().copied().unwrap_or(0.0);
    let mut acc_time = time.first().copied().unwrap_or(0);

    for i in 0..stream.len() {
        if !moving[i] {
            continue;
        }
        if i > 0 {
            acc_distance += distance[i] - distance[i - 1];
            acc_time += time[i] - time[i - 1];
        }
        new_distance.push(acc_distance);
        new_time.push(acc_time);
    }

    let altitude = stream.altitude().map(|a| keep_moving(a, moving));
    let latlng = stream.latlng().map(|l| keep_moving(l, moving));

    let reduced = SampleStream::from_parts(
        new_distance,
        new_time,
        altitude,
        Some(vec![true; kept]),
        latlng,
    );

    tracing::debug!(
        before = stream.len(),
        after = reduced.len(),
        "Removed non-moving samples"
    );
    reduced
}

/// Apply [`remove_non_moving`] to every activity stream, in parallel.
pub fn remove_non_moving_sections(activities: &mut [Activity]) {
    activities.par_iter_mut().for_each(|activity| {
        if let Some(stream) = activity.stream.as_mut() {
            *stream = remove_non_moving(stream);
        }
    });
    tracing::info!(
        activities = activities.len(),
        "Non-moving sections removed"
    );
}

fn keep_moving<T: Copy>(values: &[T], moving: &[bool]) -> Vec<T> {
    values
        .iter()
        .zip(moving)
        .filter(|(_, m)| **m)
        .map(|(v, _)| *v)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream(distance: Vec<f64>, time: Vec<u32>, moving: Vec<bool>) -> SampleStream {
        SampleStream::new(distance, time)
            .unwrap()
            .with_moving(moving)
            .unwrap()
    }

    #[test]
    fn test_plateau_is_excised() {
        let s = stream(
            vec![0.0, 10.0, 10.0, 30.0],
            vec![0, 5, 65, 75],
            vec![true, false, false, true],
        );
        let reduced = remove_non_moving(&s);

        assert_eq!(reduced.distance(), &[0.0, 20.0]);
        assert_eq!(reduced.time(), &[0, 10]);
        assert_eq!(reduced.moving(), Some(&[true, true][..]));
    }

    #[test]
    fn test_parallel_channels_follow_mask() {
        let s = stream(
            vec![0.0, 10.0, 20.0, 30.0, 40.0],
            vec![0, 10, 20, 30, 40],
            vec![true, true, false, true, true],
        )
        .with_altitude(vec![100.0, 101.0, 102.0, 103.0, 104.0])
        .unwrap()
        .with_latlng(vec![[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]])
        .unwrap();

        let reduced = remove_non_moving(&s);
        assert_eq!(reduced.distance(), &[0.0, 10.0, 20.0, 30.0]);
        assert_eq!(reduced.altitude(), Some(&[100.0, 101.0, 103.0, 104.0][..]));
        assert_eq!(reduced.latlng().map(|l| l[2]), Some([4.0, 4.0]));
    }

    #[test]
    fn test_leading_stop_keeps_origin() {
        let s = stream(
            vec![5.0, 5.0, 15.0],
            vec![0, 30, 40],
            vec![false, false, true],
        );
        let reduced = remove_non_moving(&s);
        assert_eq!(reduced.distance(), &[15.0]);
        assert_eq!(reduced.time(), &[10]);
    }

    #[test]
    fn test_all_stopped_yields_empty_stream() {
        let s = stream(vec![0.0, 0.0], vec![0, 10], vec![false, false]);
        assert!(remove_non_moving(&s).is_empty());
    }

    #[test]
    fn test_without_moving_channel_is_noop() {
        let s = SampleStream::new(vec![0.0, 10.0], vec![0, 4]).unwrap();
        assert_eq!(remove_non_moving(&s), s);
    }

    #[test]
    fn test_idempotent() {
        let s = stream(
            vec![0.0, 3.0, 3.0, 9.0, 9.0, 9.0, 14.0],
            vec![0, 1, 9, 11, 20, 30, 32],
            vec![true, true, false, true, false, false, true],
        );
        let once = remove_non_moving(&s);
        let twice = remove_non_moving(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_non_moving_sections_batch() {
        let mut activities = vec![
            Activity {
                id: 1,
                name: "Stop and go".to_string(),
                activity_type: crate::models::ActivityType::Ride,
                start_date_local: chrono::NaiveDate::from_ymd_opt(2021, 5, 1)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
                distance: 30.0,
                elapsed_time: 30,
                moving_time: 20,
                total_elevation_gain: 0.0,
                average_speed: 1.0,
                stream: Some(stream(
                    vec![0.0, 10.0, 10.0, 30.0],
                    vec![0, 10, 20, 30],
                    vec![true, true, false, true],
                )),
            },
        ];
        let mut without_stream = activities[0].clone();
        without_stream.id = 2;
        without_stream.stream = None;
        activities.push(without_stream);

        remove_non_moving_sections(&mut activities);

        let reduced = activities[0].stream.as_ref().unwrap();
        assert_eq!(reduced.distance(), &[0.0, 10.0, 30.0]);
        assert_eq!(reduced.time(), &[0, 10, 20]);
        assert!(activities[1].stream.is_none());
    }
}
