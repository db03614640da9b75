//! cl-circuit: board layout and placement tracking for circuitlab.
//!
//! Provides:
//! - Slot layout (which component each drop slot expects, which are pre-filled)
//! - Incremental layout builder with validation
//! - Placement tracker holding the circuit state and the completeness predicate
//! - Typed drag payloads validated at the input boundary
//!
//! # Example
//!
//! ```
//! use cl_circuit::{LayoutBuilder, PlacementTracker};
//! use cl_core::ComponentKind;
//!
//! let mut builder = LayoutBuilder::new();
//! builder.prefilled_slot("battery", ComponentKind::Battery).unwrap();
//! builder.slot("resistor", ComponentKind::Resistor).unwrap();
//! let layout = builder.build().unwrap();
//!
//! let mut tracker = PlacementTracker::new(layout);
//! assert!(!tracker.is_complete());
//! assert!(tracker.try_place("resistor", ComponentKind::Resistor));
//! assert!(tracker.is_complete());
//! ```

pub mod builder;
pub mod error;
pub mod layout;
pub mod payload;
pub mod tracker;
pub(crate) mod validate;

// Re-exports for ergonomics
pub use builder::LayoutBuilder;
pub use error::{CircuitError, CircuitResult};
pub use layout::{CircuitLayout, SlotSpec};
pub use payload::DragPayload;
pub use tracker::{Occupant, PlacementTracker};
