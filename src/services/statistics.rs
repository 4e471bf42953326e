// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Named report statistics.
//!
//! A [`Statistic`] is computed eagerly from a name, a [`StatisticKind`] and a
//! list of activities. It renders as `name: value`, with `Not available` in
//! place of the value whenever nothing valid was found (empty list,
//! unreachable target, no stream).

use chrono::NaiveDate;
use std::fmt;

use crate::models::{Activity, ActivityEffort, ActivityType};
use crate::services::calendar;
use crate::time_utils::format_seconds;

/// Rendered in place of a value that could not be computed.
pub const NOT_AVAILABLE: &str = "Not available";

/// What a statistic computes, with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticKind {
    ActivityCount,
    /// Distinct calendar days with at least one activity
    ActiveDays,
    /// Longest run of consecutive active days
    MaxStreak,
    TotalDistance,
    TotalElevation,
    MaxDistance,
    MaxElevation,
    MaxMovingTime,
    MostActiveMonth,
    MostActiveYear,
    /// Largest E such that E days each covered at least E km
    Eddington,
    /// Fastest window of at least `meters`
    BestEffortDistance { meters: f64 },
    /// Furthest window of at most `seconds`
    BestEffortTime { seconds: u32 },
    /// Steepest window of at least `meters`
    SteepestClimb { meters: f64 },
}

/// The activity a record or effort was found in.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRef {
    pub id: u64,
    pub name: String,
    pub activity_type: ActivityType,
    pub date: NaiveDate,
}

impl From<&Activity> for ActivityRef {
    fn from(activity: &Activity) -> Self {
        Self {
            id: activity.id,
            name: activity.name.clone(),
            activity_type: activity.activity_type.clone(),
            date: activity.start_date(),
        }
    }
}

impl fmt::Display for ActivityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.date)
    }
}

/// Computed value of a statistic.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NotAvailable,
    Count(u32),
    /// Meters
    Distance(f64),
    /// Meters
    Elevation(f64),
    /// Single activity holding a record (meters or seconds, per kind)
    Record { activity: ActivityRef, value: f64 },
    /// Calendar bucket with its summed distance in meters
    Bucket { label: String, meters: f64 },
    Effort {
        activity: ActivityRef,
        effort: ActivityEffort,
    },
}

/// One named report line.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistic {
    pub name: String,
    pub kind: StatisticKind,
    pub outcome: Outcome,
}

impl Statistic {
    /// Compute a statistic over `activities`.
    pub fn compute<'a, I>(name: impl Into<String>, kind: StatisticKind, activities: I) -> Self
    where
        I: IntoIterator<Item = &'a Activity>,
    {
        let activities: Vec<&Activity> = activities.into_iter().collect();
        let outcome = if activities.is_empty() {
            Outcome::NotAvailable
        } else {
            compute_outcome(&kind, &activities)
        };

        Self {
            name: name.into(),
            kind,
            outcome,
        }
    }

    pub fn is_available(&self) -> bool {
        self.outcome != Outcome::NotAvailable
    }

    /// Activity behind the value, for statistics that point at one.
    pub fn activity(&self) -> Option<&ActivityRef> {
        match &self.outcome {
            Outcome::Record { activity, .. } | Outcome::Effort { activity, .. } => Some(activity),
            _ => None,
        }
    }

    /// Formatted value, or [`NOT_AVAILABLE`].
    pub fn value(&self) -> String {
        match &self.outcome {
            Outcome::NotAvailable => NOT_AVAILABLE.to_string(),
            Outcome::Count(n) => match self.kind {
                StatisticKind::MaxStreak | StatisticKind::ActiveDays => format!("{} days", n),
                StatisticKind::Eddington => format!("{} km", n),
                _ => n.to_string(),
            },
            Outcome::Distance(meters) => format!("{:.2} km", meters / 1000.0),
            Outcome::Elevation(meters) => format!("{:.2} m", meters),
            Outcome::Record { activity, value } => match self.kind {
                StatisticKind::MaxElevation => format!("{:.2} m - {}", value, activity),
                StatisticKind::MaxMovingTime => {
                    format!("{} - {}", format_seconds(*value), activity)
                }
                _ => format!("{:.2} km - {}", value / 1000.0, activity),
            },
            Outcome::Bucket { label, meters } => {
                format!("{} with {:.2} km", label, meters / 1000.0)
            }
            Outcome::Effort { activity, effort } => match self.kind {
                StatisticKind::SteepestClimb { .. } => format!(
                    "{} over {:.2} km - {}",
                    effort.formatted_gradient(),
                    effort.distance / 1000.0,
                    activity
                ),
                StatisticKind::BestEffortTime { .. } => format!(
                    "{:.2} km => {} - {}",
                    effort.distance / 1000.0,
                    effort.formatted_speed(&activity.activity_type),
                    activity
                ),
                _ => format!(
                    "{} => {} - {}",
                    format_seconds(effort.seconds as f64),
                    effort.formatted_speed(&activity.activity_type),
                    activity
                ),
            },
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value())
    }
}

fn compute_outcome(kind: &StatisticKind, activities: &[&Activity]) -> Outcome {
    match kind {
        StatisticKind::ActivityCount => Outcome::Count(activities.len() as u32),
        StatisticKind::ActiveDays => {
            Outcome::Count(calendar::daily_distances(activities.iter().copied()).len() as u32)
        }
        StatisticKind::MaxStreak => Outcome::Count(max_streak(activities)),
        StatisticKind::TotalDistance => {
            Outcome::Distance(activities.iter().map(|a| a.distance).sum())
        }
        StatisticKind::TotalElevation => {
            Outcome::Elevation(activities.iter().map(|a| a.total_elevation_gain).sum())
        }
        StatisticKind::MaxDistance => max_record(activities, |a| a.distance),
        StatisticKind::MaxElevation => max_record(activities, |a| a.total_elevation_gain),
        StatisticKind::MaxMovingTime => max_record(activities, |a| a.moving_time as f64),
        StatisticKind::MostActiveMonth => {
            bucket_outcome(&calendar::group_by_month(activities.iter().copied()))
        }
        StatisticKind::MostActiveYear => {
            bucket_outcome(&calendar::group_by_year(activities.iter().copied()))
        }
        StatisticKind::Eddington => Outcome::Count(eddington_number(activities)),
        StatisticKind::BestEffortDistance { meters } => best_effort(
            activities,
            |a| a.best_effort_for_distance(*meters),
            |candidate, best| candidate.seconds < best.seconds,
        ),
        StatisticKind::BestEffortTime { seconds } => best_effort(
            activities,
            |a| a.best_distance_for_time(*seconds),
            |candidate, best| candidate.distance > best.distance,
        ),
        StatisticKind::SteepestClimb { meters } => best_effort(
            activities,
            |a| a.steepest_climb(*meters),
            |candidate, best| {
                candidate.altitude / candidate.distance > best.altitude / best.distance
            },
        ),
    }
}

/// Activity with the largest value; the first one wins ties.
fn max_record(activities: &[&Activity], value: impl Fn(&Activity) -> f64) -> Outcome {
    let mut best: Option<(&Activity, f64)> = None;
    for &activity in activities {
        let v = value(activity);
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((activity, v));
        }
    }
    match best {
        Some((activity, value)) => Outcome::Record {
            activity: ActivityRef::from(activity),
            value,
        },
        None => Outcome::NotAvailable,
    }
}

fn bucket_outcome(buckets: &[calendar::CalendarBucket<'_>]) -> Outcome {
    match calendar::most_active(buckets) {
        Some(bucket) => Outcome::Bucket {
            label: bucket.label.clone(),
            meters: bucket.total_distance(),
        },
        None => Outcome::NotAvailable,
    }
}

/// Best effort across activities; activities without a usable stream are
/// skipped. The earliest activity wins ties.
fn best_effort(
    activities: &[&Activity],
    find: impl Fn(&Activity) -> Option<ActivityEffort>,
    better: impl Fn(&ActivityEffort, &ActivityEffort) -> bool,
) -> Outcome {
    let mut best: Option<(&Activity, ActivityEffort)> = None;
    for &activity in activities {
        let Some(effort) = find(activity) else {
            continue;
        };
        if best.as_ref().is_none_or(|(_, b)| better(&effort, b)) {
            best = Some((activity, effort));
        }
    }
    match best {
        Some((activity, effort)) => Outcome::Effort {
            activity: ActivityRef::from(activity),
            effort,
        },
        None => Outcome::NotAvailable,
    }
}

fn max_streak(activities: &[&Activity]) -> u32 {
    let days = calendar::daily_distances(activities.iter().copied());
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;
    for day in days.keys() {
        current = match previous {
            Some(prev) if prev.succ_opt() == Some(*day) => current + 1,
            _ => 1,
        };
        longest = longest.max(current);
        previous = Some(*day);
    }
    longest
}

fn eddington_number(activities: &[&Activity]) -> u32 {
    let mut daily_km: Vec<u32> = calendar::daily_distances(activities.iter().copied())
        .values()
        .map(|meters| (meters / 1000.0).floor() as u32)
        .collect();
    daily_km.sort_unstable_by(|a, b| b.cmp(a));
    daily_km
        .iter()
        .enumerate()
        .take_while(|(i, km)| **km as usize >= i + 1)
        .count() as u32
}
