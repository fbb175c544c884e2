//! Error types for the uber-filters library.
//!
//! All errors are represented by the [`UberFilterError`] enum. Configuration
//! errors are non-retryable and surface at filter setup time; load errors wrap
//! the underlying database failure so the original cause stays available for
//! diagnostics.
//!
//! # Examples
//!
//! ```
//! use uber_filters::error::{Result, UberFilterError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(UberFilterError::configuration("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for uber-filters operations.
///
/// Every filter-construction failure is fatal to that filter's configuration;
/// there is no partial or degraded construction and nothing is retried.
#[derive(Error, Debug)]
pub enum UberFilterError {
    /// Invalid or missing configuration (bad settings, malformed rules,
    /// retired options, unknown tokenizer names)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Term loading failures (driver, connectivity, query execution),
    /// with the underlying cause preserved
    #[error("Load error: {message}")]
    Load {
        message: String,
        #[source]
        source: anyhow::Error,
    },

    /// Analysis-related errors (tokenization, filtering)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// I/O errors (word-list files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for operations that may fail with UberFilterError.
pub type Result<T> = std::result::Result<T, UberFilterError>;

impl UberFilterError {
    /// Create a new configuration error.
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        UberFilterError::Configuration(msg.into())
    }

    /// Create a new load error wrapping the underlying cause.
    pub fn load<S, E>(msg: S, source: E) -> Self
    where
        S: Into<String>,
        E: Into<anyhow::Error>,
    {
        UberFilterError::Load {
            message: msg.into(),
            source: source.into(),
        }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        UberFilterError::Analysis(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn test_error_construction() {
        let error = UberFilterError::configuration("missing key");
        assert_eq!(error.to_string(), "Configuration error: missing key");

        let error = UberFilterError::analysis("bad token stream");
        assert_eq!(error.to_string(), "Analysis error: bad token stream");
    }

    #[test]
    fn test_load_error_preserves_cause() {
        let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        let error = UberFilterError::load("failed to load terms", cause);

        assert_eq!(error.to_string(), "Load error: failed to load terms");
        let source = error.source().expect("load error should carry a cause");
        assert!(source.to_string().contains("connection refused"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = UberFilterError::from(io_error);

        match error {
            UberFilterError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }
}
