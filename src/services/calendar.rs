// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar grouping of activities by year, month and day.

use chrono::{Datelike, Month, NaiveDate};
use std::collections::BTreeMap;

use crate::models::Activity;

/// Day buckets per year. Feb 29 shares the Feb 28 bucket in leap years.
pub const DAYS_PER_YEAR: usize = 365;

/// Activities sharing a year, month or day.
#[derive(Debug, Clone)]
pub struct CalendarBucket<'a> {
    pub label: String,
    pub activities: Vec<&'a Activity>,
}

impl<'a> CalendarBucket<'a> {
    fn new(label: String) -> Self {
        Self {
            label,
            activities: Vec::new(),
        }
    }

    /// Summed distance in meters.
    pub fn total_distance(&self) -> f64 {
        self.activities.iter().map(|a| a.distance).sum()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

/// One bucket per year present in the input, oldest first.
pub fn group_by_year<'a, I>(activities: I) -> Vec<CalendarBucket<'a>>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut years: BTreeMap<i32, Vec<&'a Activity>> = BTreeMap::new();
    for activity in activities {
        years.entry(activity.year()).or_default().push(activity);
    }
    years
        .into_iter()
        .map(|(year, activities)| CalendarBucket {
            label: year.to_string(),
            activities,
        })
        .collect()
}

/// Twelve buckets, January to December, merging all years.
pub fn group_by_month<'a, I>(activities: I) -> Vec<CalendarBucket<'a>>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut month = Month::January;
    let mut buckets = Vec::with_capacity(12);
    for _ in 0..12 {
        buckets.push(CalendarBucket::new(month.name().to_string()));
        month = month.succ();
    }

    for activity in activities {
        buckets[activity.start_date_local.month0() as usize]
            .activities
            .push(activity);
    }
    buckets
}

/// [`DAYS_PER_YEAR`] buckets for `year`, labelled `YYYY-MM-DD`. Activities
/// from other years are ignored.
pub fn group_by_day<'a, I>(activities: I, year: i32) -> Vec<CalendarBucket<'a>>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut buckets: Vec<CalendarBucket<'a>> = (0..DAYS_PER_YEAR)
        .map(|index| CalendarBucket::new(day_label(year, index)))
        .collect();

    for activity in activities {
        let date = activity.start_date();
        if date.year() != year {
            continue;
        }
        let index = day_index(date);
        if date.month() == 2 && date.day() == 29 {
            tracing::debug!(activity_id = activity.id, "Leap day folded into Feb 28");
        }
        buckets[index].activities.push(activity);
    }
    buckets
}

/// Zero-based bucket index for a date, with Feb 29 mapped onto Feb 28 so that
/// the days after it keep their calendar position.
fn day_index(date: NaiveDate) -> usize {
    let ordinal0 = date.ordinal0() as usize;
    // ordinal0 59 is Feb 29 in a leap year
    if is_leap_year(date.year()) && ordinal0 >= 59 {
        if ordinal0 == 59 {
            58
        } else {
            ordinal0 - 1
        }
    } else {
        ordinal0
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn day_label(year: i32, index: usize) -> String {
    // 2001 is not a leap year, so ordinals map 1:1 to bucket indices
    let reference = NaiveDate::from_yo_opt(2001, index as u32 + 1);
    match reference {
        Some(date) => format!("{:04}-{}", year, date.format("%m-%d")),
        None => format!("{:04}-{:03}", year, index + 1),
    }
}

/// Bucket with the highest summed distance, ignoring empty buckets. The
/// earliest bucket wins ties.
pub fn most_active<'b, 'a>(buckets: &'b [CalendarBucket<'a>]) -> Option<&'b CalendarBucket<'a>> {
    let mut best: Option<(&'b CalendarBucket<'a>, f64)> = None;
    for bucket in buckets.iter().filter(|b| !b.is_empty()) {
        let distance = bucket.total_distance();
        if best.is_none_or(|(_, d)| distance > d) {
            best = Some((bucket, distance));
        }
    }
    best.map(|(bucket, _)| bucket)
}

/// Summed distance (meters) per calendar date with at least one activity.
pub fn daily_distances<'a, I>(activities: I) -> BTreeMap<NaiveDate, f64>
where
    I: IntoIterator<Item = &'a Activity>,
{
    let mut days = BTreeMap::new();
    for activity in activities {
        *days.entry(activity.start_date()).or_insert(0.0) += activity.distance;
    }
    days
}
