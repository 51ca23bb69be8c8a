//! Error types for the Shift Payroll Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! parsing shift data, or validating request input.

use thiserror::Error;

/// The main error type for the Shift Payroll Engine.
///
/// Time-parsing failures inside the calculator never escape as this type:
/// the calculator recovers them to a zero duration. `EngineError` is used
/// where a caller asked for strict parsing or validation.
///
/// # Example
///
/// ```
/// use shift_payroll::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/payroll.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/payroll.yaml");
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

    /// A wall-clock time string was not a valid `HH:mm` value.
    #[error("Invalid time of day '{value}': {message}")]
    InvalidTimeOfDay {
        /// The rejected input.
        value: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// An hourly wage was negative or otherwise unusable.
    #[error("Invalid hourly wage '{value}': {message}")]
    InvalidWage {
        /// The rejected wage, as text.
        value: String,
        /// A description of what made the wage invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
