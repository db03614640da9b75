//! A bounded value with synchronised text and slider views.

use cl_core::ParamId;

use crate::bounds::ParameterBounds;
use crate::error::{ControlError, ControlResult};

/// One editable quantity.
///
/// After every edit that produces a number, the text view and the slider show
/// the same value. Text that does not parse is kept as typed and leaves the
/// slider where it was; reading such a parameter fails.
#[derive(Clone, Debug, PartialEq)]
pub struct NumericParameter {
    id: ParamId,
    pub label: String,
    pub unit: String,
    bounds: ParameterBounds,
    text: String,
    slider: f64,
}

impl NumericParameter {
    /// Create a parameter showing `default` in both views.
    ///
    /// # Errors
    ///
    /// Returns error if `default` lies outside `bounds`.
    pub fn new(id: ParamId, bounds: ParameterBounds, default: f64) -> ControlResult<Self> {
        if !default.is_finite() || !bounds.contains(default) {
            return Err(ControlError::InvalidArg {
                what: "default must lie within bounds",
            });
        }
        Ok(Self {
            label: id.to_string(),
            unit: String::new(),
            id,
            bounds,
            text: render(default),
            slider: default,
        })
    }

    pub fn with_label(mut self, label: impl Into<String>, unit: impl Into<String>) -> Self {
        self.label = label.into();
        self.unit = unit.into();
        self
    }

    pub fn id(&self) -> &ParamId {
        &self.id
    }

    pub fn bounds(&self) -> ParameterBounds {
        self.bounds
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn slider(&self) -> f64 {
        self.slider
    }

    /// Apply a keystroke-level edit of the text field.
    ///
    /// Returns the synchronised value if the text is a finite number.
    pub fn edit_text(&mut self, raw: &str) -> Option<f64> {
        self.text = raw.to_string();
        let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;

        let clamped = self.bounds.clamp(value);
        if clamped != value {
            self.text = render(clamped);
        }
        self.slider = clamped;
        Some(clamped)
    }

    /// Apply a slider drag. The value snaps to the step and the text follows.
    pub fn edit_slider(&mut self, value: f64) -> f64 {
        if value.is_finite() {
            self.slider = self.bounds.snap(value);
        }
        self.text = render(self.slider);
        self.slider
    }

    /// Parse the text view the way the evaluator sees it.
    pub fn read(&self) -> ControlResult<f64> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return Err(ControlError::Missing {
                id: self.id.to_string(),
            });
        }
        let value = trimmed
            .parse::<f64>()
            .map_err(|_| ControlError::NonNumeric {
                id: self.id.to_string(),
                text: self.text.clone(),
            })?;
        if !value.is_finite() {
            return Err(ControlError::NonFinite {
                id: self.id.to_string(),
                value,
            });
        }
        Ok(value)
    }
}

fn render(value: f64) -> String {
    value.to_string()
}
