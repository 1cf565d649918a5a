//! Error definitions
//!
//! Every verification in testkit reports failure through [`Error`]. Data-access
//! operations never fail; they fall back to empty or default values instead.

use thiserror::Error;

/// Main error type for testkit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Assertion failed
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),
}

impl Error {
    /// Create an assertion failure.
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }

    /// The human-readable failure message, without the `Assertion failed:` prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::AssertionFailed(message) => message,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assertion_display() {
        let err = Error::assertion("expected 1, actual 2");
        assert_eq!(err.to_string(), "Assertion failed: expected 1, actual 2");
        assert_eq!(err.message(), "expected 1, actual 2");
    }
}
