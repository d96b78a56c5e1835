//! Terminal error types.

use derive_more::{Display, Error};
use tracing::instrument;

/// Console I/O error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_records_location() {
        let err: ConsoleError = std::io::Error::other("pipe closed").into();
        assert!(err.message.contains("pipe closed"));
        assert!(err.file.ends_with("error.rs"));
        assert!(err.to_string().starts_with("Console error: I/O error"));
    }
}
