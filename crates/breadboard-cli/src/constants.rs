//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, clap usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Config file or requested record not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (unknown widget, bad date, rejected layout change).
    pub const INVALID_INPUT: i32 = 4;
}

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "BREADBOARD_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "BREADBOARD_LOG";

/// Filter used when `BREADBOARD_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Rows shown by list views before truncating.
pub const DEFAULT_LIST_LIMIT: usize = 20;
