//! Error types for Bread Board core operations.
//!
//! Building the dataset and computing aggregates cannot fail. Errors only
//! come from parsing user-supplied names and from layout changes; the CLI
//! layer maps these to user-friendly messages.

use thiserror::Error;

/// Result type alias for Bread Board operations.
pub type Result<T> = std::result::Result<T, BreadboardError>;

/// Core error type for Bread Board operations.
#[derive(Debug, Error)]
pub enum BreadboardError {
    /// Unrecognized name for an enumerated value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Dashboard layout change rejected
    #[error("Layout error: {0}")]
    Layout(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem error while persisting preferences
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for BreadboardError {
    fn from(err: std::io::Error) -> Self {
        BreadboardError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BreadboardError {
    fn from(err: serde_json::Error) -> Self {
        BreadboardError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_io_variant() {
        let err: BreadboardError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, BreadboardError::Io(_)));
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
