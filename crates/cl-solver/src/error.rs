//! Reasons an evaluation cannot produce a result.

use cl_controls::ControlError;
use thiserror::Error;

/// Why `generate` leaves the placeholder on screen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NotReady {
    #[error("Circuit incomplete, missing slots: {}", missing.join(", "))]
    Incomplete { missing: Vec<String> },

    #[error("Parameter {id} cannot be read: {source}")]
    Unreadable { id: String, source: ControlError },

    #[error("Parameter {id} must be positive, got {value}")]
    NonPositive { id: String, value: f64 },

    #[error("Degenerate network: determinant = {determinant}")]
    DegenerateNetwork { determinant: f64 },

    #[error("Result {what} is not finite: {value}")]
    NonFiniteResult { what: &'static str, value: f64 },
}

pub type EvalResult<T> = Result<T, NotReady>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_lists_slots() {
        let err = NotReady::Incomplete {
            missing: vec!["v2".to_string(), "r2".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Circuit incomplete, missing slots: v2, r2"
        );
    }
}
