//! Error types for textsubstitute.
//!
//! The substitution filter itself never fails: malformed or missing inputs
//! fall back to returning the text unchanged. These errors cover the
//! surrounding surfaces only: configuration loading and format tag parsing.

use thiserror::Error;

/// The main error type for textsubstitute operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Format Errors ===
    /// A format tag did not name any known text format.
    #[error("unknown text format '{value}'")]
    UnknownFormat {
        /// The rejected tag, verbatim.
        value: String,
    },
}

/// A specialized Result type for textsubstitute operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create an unknown format error.
    #[must_use]
    pub fn unknown_format(value: impl Into<String>) -> Self {
        Self::UnknownFormat {
            value: value.into(),
        }
    }

    /// Create a configuration validation error.
    #[must_use]
    pub fn config_validation(message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            message: message.into(),
        }
    }
}
