//! Closed value ranges with optional slider step.

use crate::error::{ControlError, ControlResult};

/// Digits kept when snapping so `0.1 + 0.2` style noise never reaches the text view.
const SNAP_SCALE: f64 = 1e9;

/// Range `[min, max]` and the slider step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterBounds {
    min: f64,
    max: f64,
    step: Option<f64>,
}

impl ParameterBounds {
    /// Create bounds.
    ///
    /// # Errors
    ///
    /// Returns error if either end is not finite, if `min >= max`, or if
    /// `step` is given but not a positive finite number.
    pub fn new(min: f64, max: f64, step: Option<f64>) -> ControlResult<Self> {
        if !min.is_finite() || !max.is_finite() || min >= max {
            return Err(ControlError::InvalidBounds { min, max });
        }
        if let Some(step) = step
            && (!step.is_finite() || step <= 0.0)
        {
            return Err(ControlError::InvalidArg {
                what: "step must be positive and finite",
            });
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> Option<f64> {
        self.step
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Clamp, then move to the nearest step counted from `min`.
    pub fn snap(&self, value: f64) -> f64 {
        let clamped = self.clamp(value);
        let Some(step) = self.step else {
            return clamped;
        };
        let steps = ((clamped - self.min) / step).round();
        let snapped = self.clamp(self.min + steps * step);
        (snapped * SNAP_SCALE).round() / SNAP_SCALE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_bounds_rejected() {
        assert!(ParameterBounds::new(5.0, 1.0, None).is_err());
        assert!(ParameterBounds::new(1.0, 1.0, None).is_err());
        assert!(ParameterBounds::new(f64::NAN, 1.0, None).is_err());
        assert!(ParameterBounds::new(0.0, 1.0, Some(0.0)).is_err());
    }

    #[test]
    fn clamp_range() {
        let b = ParameterBounds::new(1.0, 100.0, None).unwrap();
        assert_eq!(b.clamp(-3.0), 1.0);
        assert_eq!(b.clamp(50.0), 50.0);
        assert_eq!(b.clamp(1e6), 100.0);
    }

    #[test]
    fn snap_to_step() {
        let b = ParameterBounds::new(0.0, 12.0, Some(0.1)).unwrap();
        assert_eq!(b.snap(0.26), 0.3);
        assert_eq!(b.snap(0.1 + 0.2), 0.3);
        assert_eq!(b.snap(20.0), 12.0);

        // only 1 and 7 are on the step grid; max itself is not a snap point
        let coarse = ParameterBounds::new(1.0, 10.0, Some(6.0)).unwrap();
        assert_eq!(coarse.snap(9.9), 7.0);
        assert_eq!(coarse.snap(10.0), 7.0);
        assert_eq!(coarse.snap(3.0), 1.0);
        assert_eq!(coarse.snap(4.5), 7.0);
    }
}
