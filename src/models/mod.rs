// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod effort;
pub mod stream;

pub use activity::{Activity, ActivityRecord, ActivityType};
pub use effort::ActivityEffort;
pub use stream::{RawStreams, SampleStream, StreamChannel};
