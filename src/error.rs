// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for stream validation, record conversion and the runner.

use crate::config::ConfigError;

/// Sample stream validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StreamError {
    #[error("Stream channel '{channel}' has {actual} samples, expected {expected}")]
    LengthMismatch {
        channel: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Stream channel '{channel}' is not non-decreasing at index {index}")]
    NonMonotonic { channel: &'static str, index: usize },

    #[error("Stream is missing required channel '{0}'")]
    MissingChannel(&'static str),
}

impl StreamError {
    /// Structural errors mean the upstream arrays were assembled wrongly and
    /// must halt processing. Everything else is a data-quality problem local
    /// to one activity.
    pub fn is_structural(&self) -> bool {
        matches!(self, StreamError::LengthMismatch { .. })
    }
}

/// Errors converting a wire record into a domain activity.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("Activity {id}: invalid start_date_local '{value}'")]
    InvalidDate { id: u64, value: String },

    #[error("Activity {id}: invalid distance {distance}")]
    InvalidDistance { id: u64, distance: f64 },

    #[error("Activity {id}: {source}")]
    Stream {
        id: u64,
        #[source]
        source: StreamError,
    },
}

impl RecordError {
    /// Whether this error must abort the whole batch.
    pub fn is_structural(&self) -> bool {
        match self {
            RecordError::Stream { source, .. } => source.is_structural(),
            _ => false,
        }
    }
}

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid activity data: {0}")]
    Record(#[from] RecordError),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, AppError>;
