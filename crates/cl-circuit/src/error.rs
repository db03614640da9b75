//! Layout and payload error types.

use cl_core::{ClError, SlotId};
use thiserror::Error;

/// Layout construction and drag payload errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircuitError {
    #[error("Duplicate slot id: {slot}")]
    DuplicateSlot { slot: SlotId },

    #[error("Layout has no slots")]
    EmptyLayout,

    #[error("Layout has no required slots, so the circuit could never be incomplete")]
    NoRequiredSlots,

    #[error("Invalid drag payload: {what}")]
    InvalidPayload { what: String },

    #[error(transparent)]
    Core(#[from] ClError),
}

pub type CircuitResult<T> = Result<T, CircuitError>;
