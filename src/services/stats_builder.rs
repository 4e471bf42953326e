// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Report assembly: the catalogue of statistics per activity type.
//!
//! Statistics are independent of each other, so each section computes its
//! statistics in parallel. Output order follows the catalogue.

use rayon::prelude::*;
use std::fmt;

use crate::models::{Activity, ActivityType};
use crate::services::statistics::{Statistic, StatisticKind};

/// A titled group of statistics.
#[derive(Debug, Clone)]
pub struct ReportSection {
    pub title: String,
    pub statistics: Vec<Statistic>,
}

/// Statistics for all activities followed by per-type sections.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub sections: Vec<ReportSection>,
}

impl StatsReport {
    pub fn section(&self, title: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.title == title)
    }
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            writeln!(f, "* {}", section.title)?;
            for statistic in &section.statistics {
                writeln!(f, "  {}", statistic)?;
            }
        }
        Ok(())
    }
}

/// Builds the statistics report.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatsBuilder;

impl StatsBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Compute the global section and the Ride, Run and Hike sections.
    pub fn compute_statistics(&self, activities: &[Activity]) -> StatsReport {
        let all: Vec<&Activity> = activities.iter().collect();
        let mut sections = vec![self.build_section("Global", global_catalogue(), &all)];

        for activity_type in [ActivityType::Ride, ActivityType::Run, ActivityType::Hike] {
            let filtered: Vec<&Activity> = activities
                .iter()
                .filter(|a| a.activity_type == activity_type)
                .collect();
            let catalogue = type_catalogue(&activity_type);
            sections.push(self.build_section(activity_type.as_str(), catalogue, &filtered));
        }

        tracing::info!(
            activities = activities.len(),
            sections = sections.len(),
            "Statistics computed"
        );
        StatsReport { sections }
    }

    fn build_section(
        &self,
        title: &str,
        catalogue: Vec<(String, StatisticKind)>,
        activities: &[&Activity],
    ) -> ReportSection {
        let statistics: Vec<Statistic> = catalogue
            .into_par_iter()
            .map(|(name, kind)| Statistic::compute(name, kind, activities.iter().copied()))
            .collect();

        let unavailable = statistics.iter().filter(|s| !s.is_available()).count();
        tracing::debug!(
            section = title,
            activities = activities.len(),
            unavailable,
            "Section computed"
        );

        ReportSection {
            title: title.to_string(),
            statistics,
        }
    }
}

fn global_catalogue() -> Vec<(String, StatisticKind)> {
    vec![
        stat("Nb activities", StatisticKind::ActivityCount),
        stat("Nb active days", StatisticKind::ActiveDays),
        stat("Max streak", StatisticKind::MaxStreak),
        stat("Total distance", StatisticKind::TotalDistance),
        stat("Total elevation", StatisticKind::TotalElevation),
        stat("Max distance", StatisticKind::MaxDistance),
        stat("Max elevation", StatisticKind::MaxElevation),
        stat("Max moving time", StatisticKind::MaxMovingTime),
        stat("Most active month", StatisticKind::MostActiveMonth),
        stat("Most active year", StatisticKind::MostActiveYear),
        stat("Eddington number", StatisticKind::Eddington),
    ]
}

fn type_catalogue(activity_type: &ActivityType) -> Vec<(String, StatisticKind)> {
    let mut catalogue = vec![
        stat("Nb activities", StatisticKind::ActivityCount),
        stat("Nb active days", StatisticKind::ActiveDays),
        stat("Total distance", StatisticKind::TotalDistance),
        stat("Total elevation", StatisticKind::TotalElevation),
        stat("Max distance", StatisticKind::MaxDistance),
        stat("Max elevation", StatisticKind::MaxElevation),
        stat("Most active month", StatisticKind::MostActiveMonth),
        stat("Eddington number", StatisticKind::Eddington),
    ];

    match activity_type {
        ActivityType::Ride => {
            for meters in [250.0, 500.0, 1000.0, 5000.0, 10000.0, 20000.0, 50000.0, 100000.0] {
                catalogue.push(best_distance(meters));
            }
            for seconds in [1800, 3600, 7200, 14400] {
                catalogue.push(best_time(seconds));
            }
            for meters in [250.0, 500.0, 1000.0, 5000.0, 10000.0, 20000.0] {
                catalogue.push(steepest(meters));
            }
        }
        ActivityType::Run => {
            for meters in [200.0, 400.0, 1000.0, 5000.0, 10000.0] {
                catalogue.push(best_distance(meters));
            }
            catalogue.push(stat(
                "Best half Marathon",
                StatisticKind::BestEffortDistance { meters: 21097.5 },
            ));
            catalogue.push(stat(
                "Best Marathon",
                StatisticKind::BestEffortDistance { meters: 42195.0 },
            ));
            catalogue.push(best_time(3600));
            for meters in [500.0, 1000.0] {
                catalogue.push(steepest(meters));
            }
        }
        ActivityType::Hike => {
            for meters in [1000.0, 5000.0, 10000.0] {
                catalogue.push(steepest(meters));
            }
        }
        ActivityType::Other(_) => {}
    }
    catalogue
}

fn stat(name: &str, kind: StatisticKind) -> (String, StatisticKind) {
    (name.to_string(), kind)
}

fn best_distance(meters: f64) -> (String, StatisticKind) {
    (
        format!("Best {}", distance_label(meters)),
        StatisticKind::BestEffortDistance { meters },
    )
}

fn best_time(seconds: u32) -> (String, StatisticKind) {
    let label = if seconds % 3600 == 0 {
        format!("{} h", seconds / 3600)
    } else {
        format!("{} min", seconds / 60)
    };
    (
        format!("Best {}", label),
        StatisticKind::BestEffortTime { seconds },
    )
}

fn steepest(meters: f64) -> (String, StatisticKind) {
    (
        format!("Max gradient for {}", distance_label(meters)),
        StatisticKind::SteepestClimb { meters },
    )
}

fn distance_label(meters: f64) -> String {
    if meters >= 1000.0 && meters % 1000.0 == 0.0 {
        format!("{} km", meters / 1000.0)
    } else {
        format!("{} m", meters)
    }
}
