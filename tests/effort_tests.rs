// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Effort finder regression tests.
//!
//! The linear window searches are cross-checked against a quadratic scan of
//! every window on generated streams.

use strava_stats::models::SampleStream;
use strava_stats::services::{find_best_distance_for_time, find_best_effort, find_steepest_climb};

/// Deterministic stream generator (64-bit LCG).
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

/// Stream with repeated distances and repeated timestamps.
fn generated_stream(seed: u64, len: usize) -> SampleStream {
    let mut rng = Lcg(seed);
    let mut distance = Vec::with_capacity(len);
    let mut time = Vec::with_capacity(len);
    let mut altitude = Vec::with_capacity(len);
    let (mut d, mut t, mut a) = (0.0, 0u32, 100.0);
    for _ in 0..len {
        distance.push(d);
        time.push(t);
        altitude.push(a);
        d += (rng.next() % 25) as f64;
        t += (rng.next() % 5) as u32;
        a += (rng.next() % 7) as f64 - 3.0;
    }
    SampleStream::new(distance, time)
        .unwrap()
        .with_altitude(altitude)
        .unwrap()
}

fn brute_force_best_seconds(stream: &SampleStream, target: f64) -> Option<u32> {
    let (d, t) = (stream.distance(), stream.time());
    let mut best = None;
    for s in 0..d.len() {
        for e in s + 1..d.len() {
            if d[e] - d[s] >= target && t[e] > t[s] {
                let seconds = t[e] - t[s];
                if best.is_none_or(|b| seconds < b) {
                    best = Some(seconds);
                }
            }
        }
    }
    best
}

fn brute_force_best_distance(stream: &SampleStream, seconds: u32) -> Option<f64> {
    let (d, t) = (stream.distance(), stream.time());
    let mut best: Option<f64> = None;
    for s in 0..d.len() {
        for e in s + 1..d.len() {
            if t[e] > t[s] && t[e] - t[s] <= seconds && d[e] - d[s] > 0.0 {
                let covered = d[e] - d[s];
                if best.is_none_or(|b| covered > b) {
                    best = Some(covered);
                }
            }
        }
    }
    best
}

fn brute_force_steepest(stream: &SampleStream, min_distance: f64) -> Option<f64> {
    let (d, a) = (stream.distance(), stream.altitude().unwrap());
    let mut best: Option<f64> = None;
    for s in 0..d.len() {
        for e in s + 1..d.len() {
            if d[e] - d[s] >= min_distance {
                let gradient = (a[e] - a[s]) / (d[e] - d[s]);
                if best.is_none_or(|b| gradient > b) {
                    best = Some(gradient);
                }
            }
        }
    }
    best
}

#[test]
fn test_best_effort_matches_brute_force() {
    for seed in 1..=20 {
        let stream = generated_stream(seed, 200);
        for target in [10.0, 100.0, 400.0, 1000.0] {
            let expected = brute_force_best_seconds(&stream, target);
            let found = find_best_effort(seed, &stream, target);
            assert_eq!(
                found.as_ref().map(|e| e.seconds),
                expected,
                "seed {} target {}",
                seed,
                target
            );
            if let Some(effort) = found {
                assert!(effort.distance >= target);
                assert!(effort.ix_start < effort.ix_end);
                assert_eq!(
                    effort.seconds,
                    stream.time()[effort.ix_end] - stream.time()[effort.ix_start]
                );
            }
        }
    }
}

#[test]
fn test_best_distance_matches_brute_force() {
    for seed in 1..=20 {
        let stream = generated_stream(seed, 200);
        for seconds in [5, 60, 150] {
            let expected = brute_force_best_distance(&stream, seconds);
            let found = find_best_distance_for_time(seed, &stream, seconds);
            assert_eq!(
                found.as_ref().map(|e| e.distance),
                expected,
                "seed {} seconds {}",
                seed,
                seconds
            );
            if let Some(effort) = found {
                assert!(effort.seconds <= seconds);
            }
        }
    }
}

#[test]
fn test_steepest_climb_matches_brute_force() {
    for seed in 1..=20 {
        let stream = generated_stream(seed, 150);
        for min_distance in [50.0, 200.0, 800.0] {
            let expected = brute_force_steepest(&stream, min_distance);
            let climb = find_steepest_climb(seed, &stream, min_distance);
            let (d, a) = (stream.distance(), stream.altitude().unwrap());

            assert_eq!(
                climb.as_ref().map(|c| c.altitude / c.distance),
                expected,
                "seed {} min_distance {}",
                seed,
                min_distance
            );
            if let Some(climb) = climb {
                assert!(climb.distance >= min_distance);
                assert_eq!(climb.altitude, a[climb.ix_end] - a[climb.ix_start]);
                assert_eq!(climb.distance, d[climb.ix_end] - d[climb.ix_start]);
            }
        }
    }
}

#[test]
fn test_zero_elapsed_tight_windows() {
    let stream = SampleStream::new(vec![0.0, 50.0, 150.0, 160.0], vec![0, 5, 5, 5]).unwrap();
    assert_eq!(brute_force_best_seconds(&stream, 100.0), Some(5));
    let effort = find_best_effort(1, &stream, 100.0).unwrap();
    assert_eq!(effort.seconds, 5);
    assert_eq!(effort.ix_start, 0);
}

#[test]
fn test_unreachable_targets() {
    let stream = generated_stream(7, 50);
    let total = stream.total_distance();

    assert!(find_best_effort(7, &stream, total + 1.0).is_none());
    assert!(find_steepest_climb(7, &stream, total + 1.0).is_none());
    assert!(find_best_distance_for_time(7, &stream, stream.total_time() + 1).is_none());
    assert!(find_best_effort(7, &stream, total).is_some());
}
