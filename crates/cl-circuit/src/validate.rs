//! Layout validation logic.

use std::collections::HashSet;

use crate::error::{CircuitError, CircuitResult};
use crate::layout::SlotSpec;

/// Validate slot structure: ids unique, at least one required slot.
pub(crate) fn validate_slots(slots: &[SlotSpec]) -> CircuitResult<()> {
    if slots.is_empty() {
        return Err(CircuitError::EmptyLayout);
    }

    let mut seen = HashSet::new();
    for slot in slots {
        if !seen.insert(&slot.id) {
            return Err(CircuitError::DuplicateSlot {
                slot: slot.id.clone(),
            });
        }
    }

    if !slots.iter().any(|s| s.required) {
        return Err(CircuitError::NoRequiredSlots);
    }

    Ok(())
}
