// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - stream analysis and report building.

pub mod calendar;
pub mod effort;
pub mod loader;
pub mod metrics;
pub mod reducer;
pub mod statistics;
pub mod stats_builder;

pub use calendar::{group_by_day, group_by_month, group_by_year, most_active, CalendarBucket};
pub use effort::{find_best_distance_for_time, find_best_effort, find_steepest_climb};
pub use loader::{assemble, load_activities, parse_activities, select_year};
pub use reducer::{remove_non_moving, remove_non_moving_sections};
pub use statistics::{Outcome, Statistic, StatisticKind, NOT_AVAILABLE};
pub use stats_builder::{ReportSection, StatsBuilder, StatsReport};
