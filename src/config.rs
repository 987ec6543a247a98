//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored when present.

use crate::domain::Birthday;
use crate::error::{ConfigError, ConfigResult};
use crate::services::UPCOMING_WINDOW_DAYS;
use chrono::NaiveDate;
use std::env;

/// Largest accepted value for `ASSISTANT_BIRTHDAY_WINDOW_DAYS`.
const MAX_WINDOW_DAYS: u32 = 365;

/// Configuration for the contact assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level used when `RUST_LOG` is not set (default: "warn")
    pub log_level: String,

    /// Fixed reference date for the `birthdays` command (default: the local date)
    pub today: Option<NaiveDate>,

    /// Number of days after today covered by the `birthdays` command (default: 7)
    pub birthday_window_days: u32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `ASSISTANT_TODAY`: Reference date in `DD.MM.YYYY` form
    /// - `ASSISTANT_BIRTHDAY_WINDOW_DAYS`: Upcoming birthday horizon (default: 7, max 365)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
        let today = Self::parse_env_date("ASSISTANT_TODAY")?;
        let birthday_window_days =
            Self::parse_env_u32("ASSISTANT_BIRTHDAY_WINDOW_DAYS", UPCOMING_WINDOW_DAYS)?;

        if birthday_window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "ASSISTANT_BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            today,
            birthday_window_days,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an optional `DD.MM.YYYY` environment variable.
    fn parse_env_date(var_name: &str) -> ConfigResult<Option<NaiveDate>> {
        match env::var(var_name) {
            Ok(val) => Birthday::new(&val)
                .map(|b| Some(b.date()))
                .map_err(|_| ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be a DD.MM.YYYY date, got: {}", val),
                }),
            Err(_) => Ok(None),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            today: None,
            birthday_window_days: UPCOMING_WINDOW_DAYS,
        }
    }
}
