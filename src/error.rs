//! Error types for the staffing validator.
//!
//! Validation itself never fails: an invalid record is a normal
//! [`ValidationResult`](crate::models::ValidationResult). The errors here
//! cover the only fallible operation in the crate, loading rule limits.

use thiserror::Error;

/// The main error type for the staffing validator.
///
/// # Example
///
/// ```
/// use staffing_validator::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/employee.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/employee.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but describes limits that cannot be satisfied.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The offending configuration key.
        field: String,
        /// A description of what is wrong with it.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
