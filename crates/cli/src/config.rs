//! Settings resolved from flags, then environment, then defaults.
//!
//! Every resolver takes the environment as a lookup function so callers can
//! pass `std::env::var` in production and a map in tests.

use std::path::PathBuf;

use kata_observability::LogFormat;

use crate::error::CliError;

pub const DAYS_VAR: &str = "KATA_DAYS";
pub const INVENTORY_VAR: &str = "KATA_INVENTORY";
pub const LOG_FORMAT_VAR: &str = "KATA_LOG_FORMAT";

/// Days simulated when neither `--days` nor `KATA_DAYS` is given.
pub const DEFAULT_DAYS: u32 = 5;

/// Longest run accepted from flags or environment; every day is kept in
/// memory until the report is printed.
pub const MAX_DAYS: u32 = 3_650;

/// Read the real process environment.
pub fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolve the log format before logging exists, so a bad value is an error.
pub fn log_format(
    flag: Option<LogFormat>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<LogFormat, CliError> {
    if let Some(format) = flag {
        return Ok(format);
    }
    match env(LOG_FORMAT_VAR) {
        Some(raw) => raw
            .parse()
            .map_err(|e: String| CliError::config(format!("{LOG_FORMAT_VAR}: {e}"))),
        None => Ok(LogFormat::default()),
    }
}

pub fn days(flag: Option<u32>, env: impl Fn(&str) -> Option<String>) -> u32 {
    if let Some(days) = flag {
        return days;
    }
    match env(DAYS_VAR) {
        Some(raw) => match raw.trim().parse::<u32>() {
            Ok(days) if days <= MAX_DAYS => days,
            Ok(_) => {
                tracing::warn!(value = %raw, "{DAYS_VAR} exceeds {MAX_DAYS}; using {DEFAULT_DAYS}");
                DEFAULT_DAYS
            }
            Err(_) => {
                tracing::warn!(value = %raw, "{DAYS_VAR} is not a day count; using {DEFAULT_DAYS}");
                DEFAULT_DAYS
            }
        },
        None => DEFAULT_DAYS,
    }
}

pub fn inventory_path(
    flag: Option<PathBuf>,
    env: impl Fn(&str) -> Option<String>,
) -> Option<PathBuf> {
    flag.or_else(|| {
        env(INVENTORY_VAR)
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
    })
}
