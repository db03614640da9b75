//! The ordered collection of parameters a lab exposes.

use cl_core::ParamId;

use crate::error::{ControlError, ControlResult};
use crate::parameter::NumericParameter;

/// Parameters in display order, looked up by id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterSet {
    params: Vec<NumericParameter>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter. Ids must be unique within the set.
    pub fn insert(&mut self, param: NumericParameter) -> ControlResult<()> {
        if self.get(param.id().as_str()).is_some() {
            return Err(ControlError::InvalidArg {
                what: "duplicate parameter id",
            });
        }
        self.params.push(param);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&NumericParameter> {
        self.params.iter().find(|p| p.id().as_str() == id)
    }

    fn get_mut(&mut self, id: &str) -> ControlResult<&mut NumericParameter> {
        self.params
            .iter_mut()
            .find(|p| p.id().as_str() == id)
            .ok_or_else(|| ControlError::UnknownParameter { id: id.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &NumericParameter> {
        self.params.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ParamId> {
        self.params.iter().map(|p| p.id())
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Current value of a parameter; a missing parameter reads as `Missing`.
    pub fn read(&self, id: &str) -> ControlResult<f64> {
        self.get(id)
            .ok_or_else(|| ControlError::Missing { id: id.to_string() })?
            .read()
    }

    pub fn edit_text(&mut self, id: &str, raw: &str) -> ControlResult<Option<f64>> {
        Ok(self.get_mut(id)?.edit_text(raw))
    }

    pub fn edit_slider(&mut self, id: &str, value: f64) -> ControlResult<f64> {
        Ok(self.get_mut(id)?.edit_slider(value))
    }
}
