//! Incremental layout builder.

use cl_core::{ComponentKind, SlotId};

use crate::error::CircuitResult;
use crate::layout::{CircuitLayout, SlotSpec};
use crate::validate;

/// Builder for constructing a slot layout incrementally.
///
/// Use `slot`, `prefilled_slot` or `add_slot` to describe the board,
/// then call `build()` to validate and freeze it into a `CircuitLayout`.
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    slots: Vec<SlotSpec>,
}

impl LayoutBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an empty slot the learner must fill.
    pub fn slot(&mut self, id: &str, expects: ComponentKind) -> CircuitResult<&mut Self> {
        self.add_slot(SlotSpec {
            id: SlotId::new(id)?,
            label: None,
            expects,
            prefilled: false,
            required: true,
        })
    }

    /// Add a slot that is already wired when the board loads.
    pub fn prefilled_slot(&mut self, id: &str, expects: ComponentKind) -> CircuitResult<&mut Self> {
        self.add_slot(SlotSpec {
            id: SlotId::new(id)?,
            label: None,
            expects,
            prefilled: true,
            required: false,
        })
    }

    /// Add a fully specified slot.
    pub fn add_slot(&mut self, spec: SlotSpec) -> CircuitResult<&mut Self> {
        self.slots.push(spec);
        Ok(self)
    }

    /// Validate and freeze the layout.
    pub fn build(self) -> CircuitResult<CircuitLayout> {
        validate::validate_slots(&self.slots)?;
        Ok(CircuitLayout { slots: self.slots })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CircuitError;

    #[test]
    fn empty_builder_is_rejected() {
        assert_eq!(LayoutBuilder::new().build(), Err(CircuitError::EmptyLayout));
    }

    #[test]
    fn duplicate_slot_is_rejected() {
        let mut builder = LayoutBuilder::new();
        builder.slot("led", ComponentKind::Led).unwrap();
        builder.slot("led", ComponentKind::Led).unwrap();
        assert!(matches!(
            builder.build(),
            Err(CircuitError::DuplicateSlot { .. })
        ));
    }

    #[test]
    fn layout_without_required_slots_is_rejected() {
        let mut builder = LayoutBuilder::new();
        builder
            .prefilled_slot("battery", ComponentKind::Battery)
            .unwrap();
        assert_eq!(builder.build(), Err(CircuitError::NoRequiredSlots));
    }

    #[test]
    fn blank_slot_id_is_rejected() {
        let mut builder = LayoutBuilder::new();
        assert!(matches!(
            builder.slot(" ", ComponentKind::Led),
            Err(CircuitError::Core(_))
        ));
    }

    #[test]
    fn add_slot_keeps_label() {
        let mut builder = LayoutBuilder::new();
        builder
            .add_slot(SlotSpec {
                id: SlotId::new("v2").unwrap(),
                label: Some("V2".to_string()),
                expects: ComponentKind::Battery,
                prefilled: false,
                required: true,
            })
            .unwrap();
        let layout = builder.build().unwrap();
        assert_eq!(layout.slot("v2").unwrap().label.as_deref(), Some("V2"));
    }
}
