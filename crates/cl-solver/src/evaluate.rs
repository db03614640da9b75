//! Readiness checks and result formatting.

use cl_circuit::PlacementTracker;
use cl_controls::ParameterSet;
use cl_core::{Variant, fixed};
use tracing::debug;

use crate::error::{EvalResult, NotReady};
use crate::model::{CircuitModel, Inputs, Reading};

/// A successful evaluation: the physics and the string for the result panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub variant: Variant,
    pub reading: Reading,
    pub display: String,
}

/// Evaluate the circuit.
///
/// Checks, in order: (a) every required slot is placed; (b) every required
/// parameter reads as a finite number; (c) every required parameter is
/// strictly positive. The first failing check is reported.
pub fn evaluate(
    tracker: &PlacementTracker,
    params: &ParameterSet,
    model: &dyn CircuitModel,
) -> EvalResult<Evaluation> {
    if !tracker.is_complete() {
        let missing = tracker
            .missing_slots()
            .into_iter()
            .map(|s| s.id.to_string())
            .collect();
        return Err(NotReady::Incomplete { missing });
    }

    let variant = model.variant();
    let inputs = read_inputs(params, variant)?;
    let reading = model.solve(&inputs)?;
    let shown = fixed(reading.headline(), variant.decimals());

    debug!(%variant, %shown, "evaluation complete");
    Ok(Evaluation {
        variant,
        reading,
        display: shown,
    })
}

/// Read and validate the variant's required parameters.
pub fn read_inputs(params: &ParameterSet, variant: Variant) -> EvalResult<Inputs> {
    let ids = variant.required_parameters();

    let mut values = Vec::with_capacity(ids.len());
    for &id in ids {
        let value = params.read(id).map_err(|source| NotReady::Unreadable {
            id: id.to_string(),
            source,
        })?;
        values.push((id, value));
    }

    let mut inputs = Inputs::new();
    for (id, value) in values {
        if value <= 0.0 {
            return Err(NotReady::NonPositive {
                id: id.to_string(),
                value,
            });
        }
        inputs.insert(id, value);
    }
    Ok(inputs)
}
