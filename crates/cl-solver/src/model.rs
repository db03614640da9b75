//! The seam between validated inputs and the per-lab physics.

use std::collections::BTreeMap;

use cl_core::Variant;

use crate::error::{EvalResult, NotReady};
use crate::mesh::{MeshModel, MeshReading};
use crate::ohm::{OhmModel, OhmReading};

/// Validated inputs: every required parameter, finite and strictly positive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inputs {
    values: BTreeMap<&'static str, f64>,
}

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &'static str, value: f64) -> Self {
        self.values.insert(id, value);
        self
    }

    pub fn insert(&mut self, id: &'static str, value: f64) {
        self.values.insert(id, value);
    }

    pub fn get(&self, id: &'static str) -> EvalResult<f64> {
        self.values.get(id).copied().ok_or_else(|| NotReady::Unreadable {
            id: id.to_string(),
            source: cl_controls::ControlError::Missing { id: id.to_string() },
        })
    }
}

/// Result of one lab's computation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reading {
    Ohm(OhmReading),
    Mesh(MeshReading),
}

impl Reading {
    /// The number the result panel shows, in its base SI unit.
    pub fn headline(&self) -> f64 {
        match self {
            Reading::Ohm(r) => r.power.value,
            Reading::Mesh(r) => r.shared_current.value.abs(),
        }
    }
}

/// Physics of one lab variant.
///
/// Models are pure functions of their inputs.
pub trait CircuitModel: Send + Sync {
    fn variant(&self) -> Variant;

    /// Compute the reading from validated inputs.
    fn solve(&self, inputs: &Inputs) -> EvalResult<Reading>;
}

/// The model that implements a variant.
pub fn model_for(variant: Variant) -> Box<dyn CircuitModel> {
    match variant {
        Variant::OhmPower => Box::new(OhmModel),
        Variant::MeshCurrent => Box::new(MeshModel::default()),
    }
}
