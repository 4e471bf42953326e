//! Runner configuration loaded from environment variables.
//!
//! A `.env` file is honored for local use.

use std::env;
use std::path::PathBuf;

/// Runner configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the exported activities JSON (array of activity records)
    pub activities_file: PathBuf,
    /// Excise non-moving sections from streams before analysis
    pub remove_non_moving_sections: bool,
    /// Restrict the report to activities started in this year
    pub year: Option<i32>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            activities_file: PathBuf::from("tests/fixtures/activities.json"),
            remove_non_moving_sections: false,
            year: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let activities_file = env::var("ACTIVITIES_FILE")
            .map(PathBuf::from)
            .map_err(|_| ConfigError::Missing("ACTIVITIES_FILE"))?;

        let remove_non_moving_sections = match env::var("REMOVE_NON_MOVING_SECTIONS") {
            Ok(v) => parse_flag(&v).ok_or(ConfigError::Invalid {
                name: "REMOVE_NON_MOVING_SECTIONS",
                value: v,
            })?,
            Err(_) => false,
        };

        let year = match env::var("STATS_YEAR") {
            Ok(v) if !v.trim().is_empty() => Some(v.trim().parse().map_err(|_| {
                ConfigError::Invalid {
                    name: "STATS_YEAR",
                    value: v.clone(),
                }
            })?),
            _ => None,
        };

        Ok(Self {
            activities_file,
            remove_non_moving_sections,
            year,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: '{value}'")]
    Invalid { name: &'static str, value: String },
}
