// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Strava-Stats: statistics from Strava activity streams
//!
//! This crate loads exported Strava activities with their sample streams
//! and computes best efforts, steepest climbs, calendar aggregates and a
//! per-sport statistics report.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
