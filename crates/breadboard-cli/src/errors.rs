//! CLI errors that carry a dedicated exit code.

use std::fmt;

use breadboard_core::BreadboardError;

use crate::constants::exit_codes;
use crate::ui::{error_message, UiContext};

/// An error the CLI reports with a hint and a specific exit code.
#[derive(Debug)]
pub enum CliError {
    NotFound { message: String, hint: String },
    InvalidInput { message: String, hint: Option<String> },
}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound { message, .. } | Self::InvalidInput { message, .. } => message,
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::NotFound { hint, .. } => Some(hint),
            Self::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_codes::NOT_FOUND,
            Self::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }

    /// Print the error to stderr and exit with its code.
    pub fn exit(&self, ui: &UiContext) -> ! {
        eprintln!("{}", error_message(ui, self.message(), self.hint()));
        std::process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for CliError {}

/// Parse and layout failures from the core are the user's input being wrong.
impl From<BreadboardError> for CliError {
    fn from(err: BreadboardError) -> Self {
        match err {
            BreadboardError::Parse(message)
            | BreadboardError::Layout(message)
            | BreadboardError::InvalidInput(message) => Self::invalid_input(message),
            io @ BreadboardError::Io(_) => Self::invalid_input(io.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::not_found("missing", "run init").exit_code(), 3);
        assert_eq!(CliError::invalid_input("bad").exit_code(), 4);
    }

    #[test]
    fn test_layout_error_maps_to_invalid_input() {
        let err: CliError = BreadboardError::Layout("already placed".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(err.message(), "already placed");
        assert!(err.hint().is_none());
    }

    #[test]
    fn test_io_error_keeps_its_prefix() {
        let err: CliError = BreadboardError::Io("disk full".to_string()).into();
        assert_eq!(err.exit_code(), exit_codes::INVALID_INPUT);
        assert_eq!(err.message(), "I/O error: disk full");
    }
}
