//! Frozen slot layout of one circuit board.

use cl_core::{ComponentKind, SlotId};

/// One drop slot on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotSpec {
    pub id: SlotId,
    /// Label revealed once the slot is filled (e.g. `V2`).
    pub label: Option<String>,
    /// The only component kind this slot accepts.
    pub expects: ComponentKind,
    /// Already wired at start, e.g. the fixed battery.
    pub prefilled: bool,
    /// Must be filled for the circuit to count as complete.
    pub required: bool,
}

impl SlotSpec {
    pub fn accepts(&self, kind: ComponentKind) -> bool {
        self.expects == kind
    }
}

/// Immutable slot layout. Build one with [`crate::LayoutBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitLayout {
    pub(crate) slots: Vec<SlotSpec>,
}

impl CircuitLayout {
    pub fn slots(&self) -> &[SlotSpec] {
        &self.slots
    }

    pub fn slot(&self, id: &str) -> Option<&SlotSpec> {
        self.slots.iter().find(|s| s.id.as_str() == id)
    }

    pub fn required_slots(&self) -> impl Iterator<Item = &SlotSpec> {
        self.slots.iter().filter(|s| s.required)
    }
}
