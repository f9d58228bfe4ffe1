//! Error types for the Quote Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while producing a quote.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Quote Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use quote_engine::error::QuoteError;
///
/// let error = QuoteError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum QuoteError {
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

    /// No pricing policy is effective on or before the requested date.
    #[error("No pricing policy found for date {date}")]
    PolicyNotFound {
        /// The date for which a policy was requested.
        date: NaiveDate,
    },

    /// The pricing policy defines no multiplier for the requested frequency.
    ///
    /// The original estimator let an out-of-table frequency produce a NaN
    /// price; here an uncovered key is a configuration fault.
    #[error("No frequency multiplier defined for {nights_per_week} nights/week")]
    FrequencyNotCovered {
        /// The requested collection nights per week.
        nights_per_week: u8,
    },

    /// The pricing policy defines no multiplier for the property type.
    #[error("No property multiplier defined for property type '{property_type}'")]
    PropertyTypeNotCovered {
        /// The property type missing from the policy table.
        property_type: String,
    },

    /// A quote request field was invalid or inconsistent.
    #[error("Invalid quote field '{field}': {message}")]
    InvalidQuote {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The supplied ZIP code is not a valid 5-digit ZIP.
    ///
    /// Distinct from a "not serviceable" outcome, which is not an error.
    #[error("Not a valid 5-digit ZIP code: '{input}'")]
    InvalidZip {
        /// The raw input that failed validation.
        input: String,
    },
}

/// A type alias for Results that return QuoteError.
pub type QuoteResult<T> = Result<T, QuoteError>;
