//! Ohm's-law power lab: one source driving a resistor and an LED.

use cl_core::{Current, Power, Resistance, Variant, Voltage, ohms, volts};
use tracing::debug;

use crate::error::{EvalResult, NotReady};
use crate::model::{CircuitModel, Inputs, Reading};

/// Power and current of the single-loop circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct OhmReading {
    /// Dissipated power, `V²/R`.
    pub power: Power,
    /// Loop current, `V/R`; only drives the LED colour.
    pub current: Current,
}

/// Single loop: source `v` across resistance `r`. The LED is treated as ideal.
#[derive(Debug, Clone, Copy, Default)]
pub struct OhmModel;

impl OhmModel {
    /// Power and current; fails when either overflows.
    pub fn compute(v: Voltage, r: Resistance) -> EvalResult<OhmReading> {
        let power: Power = v * v / r;
        let current: Current = v / r;

        if !power.value.is_finite() {
            debug!(v = v.value, r = r.value, "ohm power overflowed");
            return Err(NotReady::NonFiniteResult {
                what: "power",
                value: power.value,
            });
        }
        if !current.value.is_finite() {
            return Err(NotReady::NonFiniteResult {
                what: "current",
                value: current.value,
            });
        }
        Ok(OhmReading { power, current })
    }
}

impl CircuitModel for OhmModel {
    fn variant(&self) -> Variant {
        Variant::OhmPower
    }

    fn solve(&self, inputs: &Inputs) -> EvalResult<Reading> {
        let v = volts(inputs.get("v")?);
        let r = ohms(inputs.get("r")?);
        Ok(Reading::Ohm(Self::compute(v, r)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cl_core::as_milliamps;

    #[test]
    fn five_volts_across_hundred_ohms() {
        let reading = OhmModel::compute(volts(5.0), ohms(100.0)).unwrap();
        assert!((reading.power.value - 0.25).abs() < 1e-12);
        assert!((as_milliamps(reading.current) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn solve_reads_named_inputs() {
        let inputs = Inputs::new().with("v", 12.0).with("r", 48.0);
        let Reading::Ohm(reading) = OhmModel.solve(&inputs).unwrap() else {
            panic!("expected ohm reading");
        };
        assert!((reading.power.value - 3.0).abs() < 1e-12);
    }

    #[test]
    fn solve_without_inputs_is_not_ready() {
        assert!(OhmModel.solve(&Inputs::new().with("v", 1.0)).is_err());
    }

    #[test]
    fn overflowing_power_is_not_ready() {
        let err = OhmModel::compute(volts(1e200), ohms(1.0)).unwrap_err();
        assert!(matches!(
            err,
            NotReady::NonFiniteResult { what: "power", .. }
        ));
    }
}
