//! Error types for the Delivery Fee Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing fees or loading
//! a fee policy.

use thiserror::Error;

/// The main error type for the Delivery Fee Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use delivery_fee_engine::error::EngineError;
///
/// let error = EngineError::InvalidAmount {
///     field: "order_amount".to_string(),
///     value: "-1.00".to_string(),
///     reason: "must not be negative".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid amount for 'order_amount' (-1.00): must not be negative"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An amount was negative, non-numeric, or non-finite.
    #[error("Invalid amount for '{field}' ({value}): {reason}")]
    InvalidAmount {
        /// The input that failed (e.g., "order_amount", "bonus").
        field: String,
        /// The rejected value as supplied by the caller.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A fee policy broke one of its invariants.
    #[error("Invalid fee policy: {message}")]
    InvalidPolicy {
        /// A description of the violated invariant.
        message: String,
    },

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
}

impl EngineError {
    /// Builds an [`EngineError::InvalidAmount`] for the given field.
    pub fn invalid_amount(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
