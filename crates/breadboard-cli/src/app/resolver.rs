//! Resolution of the config path, the dataset anchor and the display timezone.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::cli::Cli;
use crate::config::{default_config_path, BreadboardConfig};
use crate::constants::CONFIG_ENV;
use crate::errors::CliError;

/// Where the config file lives and whether the user chose that location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    /// Set by `--config` or `BREADBOARD_CONFIG` rather than the XDG default
    pub explicit: bool,
}

/// Resolve the config file path: `--config`, then `BREADBOARD_CONFIG`, then XDG.
pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<ConfigLocation> {
    if let Some(path) = cli.config.clone() {
        return Ok(ConfigLocation {
            path,
            explicit: true,
        });
    }
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(ConfigLocation {
                path: PathBuf::from(value),
                explicit: true,
            });
        }
    }
    Ok(ConfigLocation {
        path: default_config_path()?,
        explicit: false,
    })
}

/// Parse a datetime string (ISO-8601 or YYYY-MM-DD, midnight UTC).
pub fn parse_datetime(value: &str) -> Result<DateTime<Utc>, CliError> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    if let Some(naive) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(CliError::invalid_input_with_hint(
        format!("Invalid date/time: {}", value),
        "Use ISO-8601 (2025-06-15T12:00:00Z) or YYYY-MM-DD.",
    ))
}

/// Dataset anchor: `--now`/`BREADBOARD_NOW`, then the config, then the current time.
pub fn resolve_anchor(cli: &Cli, config: &BreadboardConfig) -> Result<DateTime<Utc>, CliError> {
    if let Some(value) = cli.now.as_deref() {
        debug!(source = "flag", value, "Resolved anchor");
        return parse_datetime(value);
    }
    if let Some(value) = config.data.reference_date.as_deref() {
        debug!(source = "config", value, "Resolved anchor");
        return parse_datetime(value);
    }
    Ok(Utc::now())
}

/// Parse an IANA timezone name.
pub fn parse_timezone(name: &str) -> Result<Tz, CliError> {
    name.trim().parse::<Tz>().map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Unknown timezone: {}", name),
            "Use an IANA name such as America/New_York or UTC.",
        )
    })
}

/// Error for commands that need an existing config file.
pub fn missing_config_error(path: &std::path::Path) -> CliError {
    CliError::not_found(
        format!("No config found at {}", path.display()),
        "Run `breadboard init` to create one.",
    )
}
