//! Two-loop mesh analysis.
//!
//! Loop A holds source `v1` and `r1`, loop B holds `v2` and `r2`, and the
//! loops share `r3`. Both mesh currents are oriented so they pass through `r3`
//! in the same direction, giving the KVL system
//!
//! ```text
//! | r1+r3   r3   | |Ia|   |v1|
//! |  r3    r2+r3 | |Ib| = |v2|
//! ```
//!
//! and the shared-branch current `I3 = Ia + Ib = (v1·r2 + v2·r1) / det`.

use cl_core::{Current, Resistance, Variant, Voltage, amps, ohms, volts};
use nalgebra::{Matrix2, Vector2};
use tracing::debug;

use crate::error::{EvalResult, NotReady};
use crate::model::{CircuitModel, Inputs, Reading};

/// Mesh currents and the shared-branch current.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshReading {
    /// Determinant of the mesh impedance matrix (Ω²).
    pub determinant: f64,
    /// Loop currents `[Ia, Ib]`.
    pub loop_currents: [Current; 2],
    /// Current through the shared resistor `r3`.
    pub shared_current: Current,
}

/// Two-mesh solver with a guard against singular networks.
#[derive(Debug, Clone, Copy)]
pub struct MeshModel {
    /// Smallest `|det|` accepted, relative to the product of the diagonal.
    pub min_relative_det: f64,
}

impl Default for MeshModel {
    fn default() -> Self {
        Self {
            min_relative_det: 1e-12,
        }
    }
}

impl MeshModel {
    /// Solve the two-mesh network.
    ///
    /// Rejects a determinant that is non-finite or at most
    /// `min_relative_det` times the diagonal product: such a determinant has
    /// lost nearly all its significant digits to cancellation.
    pub fn compute(
        &self,
        sources: [Voltage; 2],
        resistors: [Resistance; 3],
    ) -> EvalResult<MeshReading> {
        let [v1, v2] = sources.map(|v| v.value);
        let [r1, r2, r3] = resistors.map(|r| r.value);

        let z = Matrix2::new(r1 + r3, r3, r3, r2 + r3);
        let sources = Vector2::new(v1, v2);

        let det = z.determinant();
        let scale = (z[(0, 0)] * z[(1, 1)]).abs();
        if !det.is_finite() || !scale.is_finite() || det.abs() <= self.min_relative_det * scale {
            debug!(det, scale, "mesh impedance matrix is singular");
            return Err(NotReady::DegenerateNetwork { determinant: det });
        }

        let loops = z
            .lu()
            .solve(&sources)
            .ok_or(NotReady::DegenerateNetwork { determinant: det })?;

        // Closed form avoids the cancellation in Ia + Ib.
        let shared = (v1 * r2 + v2 * r1) / det;
        if !shared.is_finite() || !loops.iter().all(|i| i.is_finite()) {
            return Err(NotReady::DegenerateNetwork { determinant: det });
        }

        Ok(MeshReading {
            determinant: det,
            loop_currents: [amps(loops[0]), amps(loops[1])],
            shared_current: amps(shared),
        })
    }
}

impl CircuitModel for MeshModel {
    fn variant(&self) -> Variant {
        Variant::MeshCurrent
    }

    fn solve(&self, inputs: &Inputs) -> EvalResult<Reading> {
        let reading = self.compute(
            [volts(inputs.get("v1")?), volts(inputs.get("v2")?)],
            [
                ohms(inputs.get("r1")?),
                ohms(inputs.get("r2")?),
                ohms(inputs.get("r3")?),
            ],
        )?;
        Ok(Reading::Mesh(reading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(v: [f64; 2], r: [f64; 3]) -> EvalResult<MeshReading> {
        MeshModel::default().compute(v.map(volts), r.map(ohms))
    }

    #[test]
    fn reference_network() {
        let reading = solve([10.0, 5.0], [2.0, 3.0, 1.0]).unwrap();
        assert!((reading.determinant - 11.0).abs() < 1e-12);
        assert!((reading.shared_current.value - 40.0 / 11.0).abs() < 1e-12);
        assert!((reading.loop_currents[0].value - 35.0 / 11.0).abs() < 1e-12);
        assert!((reading.loop_currents[1].value - 5.0 / 11.0).abs() < 1e-12);
    }

    #[test]
    fn overflowing_network_is_degenerate() {
        let err = solve([1.0, 1.0], [1e200, 1e200, 1e200]).unwrap_err();
        assert!(matches!(err, NotReady::DegenerateNetwork { .. }));
    }

    #[test]
    fn singular_matrix_is_degenerate() {
        // r1 = r2 = 0 makes both rows equal to [r3, r3]
        let err = solve([1.0, 2.0], [0.0, 0.0, 5.0]).unwrap_err();
        assert!(matches!(err, NotReady::DegenerateNetwork { .. }));
    }

    #[test]
    fn extreme_shared_resistor_loses_the_determinant() {
        // det ≈ 0.2 out of a 1e12 diagonal product: all but a few digits cancel.
        let err = solve([1.0, 1.0], [1e-7, 1e-7, 1e6]).unwrap_err();
        assert!(matches!(err, NotReady::DegenerateNetwork { .. }));

        // A milder ratio keeps enough digits and is accepted.
        let reading = solve([1.0, 1.0], [1e-3, 1e-3, 1e6]).unwrap();
        assert!((reading.determinant - 2e3).abs() < 1e-3);
    }

    #[test]
    fn opposing_sources_can_cancel() {
        let reading = solve([-4.0, 4.0], [2.0, 2.0, 1.0]).unwrap();
        assert!(reading.shared_current.value.abs() < 1e-12);
    }
}
