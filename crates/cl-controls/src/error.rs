//! Error types for parameter inputs.

use thiserror::Error;

/// Result type for parameter operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors raised by parameter construction and reads.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a parameter function.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Bounds that cannot hold any value.
    #[error("Invalid bounds: min={min}, max={max}")]
    InvalidBounds { min: f64, max: f64 },

    /// No parameter with this id.
    #[error("Unknown parameter: {id}")]
    UnknownParameter { id: String },

    /// The text view is empty.
    #[error("Parameter {id} is empty")]
    Missing { id: String },

    /// The text view does not parse as a number.
    #[error("Parameter {id} is not a number: '{text}'")]
    NonNumeric { id: String, text: String },

    /// The text view parses to infinity or NaN.
    #[error("Parameter {id} is not finite: {value}")]
    NonFinite { id: String, value: f64 },
}
