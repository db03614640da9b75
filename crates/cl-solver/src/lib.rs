//! Circuit evaluator for circuitlab.
//!
//! Given a placement tracker and the current parameter values, checks that the
//! circuit is complete and that every required input is a finite positive
//! number, then computes the lab's headline quantity:
//!
//! - **Ohm lab**: power `P = V²/R` (plus the loop current for the LED)
//! - **Mesh lab**: shared-branch current of a two-loop network
//!
//! Evaluation never mutates the tracker or the parameters.

pub mod error;
pub mod evaluate;
pub mod mesh;
pub mod model;
pub mod ohm;

pub use error::{EvalResult, NotReady};
pub use evaluate::{Evaluation, evaluate, read_inputs};
pub use mesh::{MeshModel, MeshReading};
pub use model::{CircuitModel, Inputs, Reading, model_for};
pub use ohm::{OhmModel, OhmReading};
