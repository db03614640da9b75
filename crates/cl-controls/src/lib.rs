//! Bounded numeric inputs for circuitlab.
//!
//! Every editable quantity (source voltages, resistances) is a
//! [`NumericParameter`] with two views that must agree: the text field the
//! learner types into and the slider they drag. Edits to either view are
//! clamped to the parameter's bounds and mirrored into the other view.
//!
//! # Design Principles
//!
//! - **Raw text is kept**: a half-typed or empty field is a legal state; it only
//!   becomes an error when the evaluator reads it
//! - **Bounds are validated once**: `ParameterBounds::new` rejects inverted or
//!   non-finite ranges, so edits never need to re-check them

pub mod bounds;
pub mod error;
pub mod parameter;
pub mod set;

pub use bounds::ParameterBounds;
pub use error::{ControlError, ControlResult};
pub use parameter::NumericParameter;
pub use set::ParameterSet;
