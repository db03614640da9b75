//! cl-core: stable foundation for circuitlab.
//!
//! Contains:
//! - units (uom SI electrical types + constructors)
//! - numeric (Real + finiteness checks + display rounding)
//! - ids (slot and parameter identifiers)
//! - kind (component kinds and lab variants)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod kind;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ClError, ClResult};
pub use ids::*;
pub use kind::{ComponentKind, Variant};
pub use numeric::*;
pub use units::*;
