// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava-Stats runner
//!
//! Loads an exported activity file and prints the statistics report to
//! stdout. Logs go to stderr as JSON.

use anyhow::Context;
use strava_stats::{
    config::Config,
    services::{load_activities, remove_non_moving_sections, select_year, StatsBuilder},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!(
        file = %config.activities_file.display(),
        remove_non_moving = config.remove_non_moving_sections,
        year = ?config.year,
        "Starting Strava-Stats"
    );

    let mut activities = load_activities(&config.activities_file)
        .with_context(|| format!("Failed to load {}", config.activities_file.display()))?;

    if let Some(year) = config.year {
        activities = select_year(activities, year);
    }

    if config.remove_non_moving_sections {
        remove_non_moving_sections(&mut activities);
    }

    let report = StatsBuilder::new().compute_statistics(&activities);
    print!("{}", report);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("strava_stats=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
