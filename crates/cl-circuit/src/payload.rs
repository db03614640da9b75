//! Typed drag payload, validated where the raw transfer data enters.

use cl_core::ComponentKind;

use crate::error::{CircuitError, CircuitResult};

/// What a drag or touch gesture carries: the component kind and the palette
/// element it was picked up from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragPayload {
    pub component: ComponentKind,
    pub source_id: String,
}

impl DragPayload {
    pub fn new(component: ComponentKind, source_id: impl Into<String>) -> Self {
        Self {
            component,
            source_id: source_id.into(),
        }
    }

    /// Parse the loosely typed strings a drag transfer carries.
    pub fn from_transfer(component_type: &str, source_id: &str) -> CircuitResult<Self> {
        let component = component_type
            .trim()
            .parse::<ComponentKind>()
            .map_err(|e| CircuitError::InvalidPayload {
                what: e.to_string(),
            })?;
        let source_id = source_id.trim();
        if source_id.is_empty() {
            return Err(CircuitError::InvalidPayload {
                what: "missing source element id".to_string(),
            });
        }
        Ok(Self::new(component, source_id))
    }
}
