//! Lab definition validation logic.

use crate::schema::{LabDef, ParameterDef, SlotDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_lab(lab: &LabDef) -> Result<(), ValidationError> {
    if lab.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: lab.version,
        });
    }

    if lab.name.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "name".to_string(),
            value: lab.name.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    validate_slots(lab)?;

    let mut param_ids = HashSet::new();
    for param in &lab.parameters {
        if !param_ids.insert(param.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: param.id.clone(),
                context: "parameters".to_string(),
            });
        }
        validate_parameter(param)?;
    }

    for id in lab.variant.required_parameters() {
        if !param_ids.contains(id) {
            return Err(ValidationError::MissingReference {
                id: id.to_string(),
                context: format!("parameters required by variant '{}'", lab.variant),
            });
        }
    }

    Ok(())
}

fn validate_slots(lab: &LabDef) -> Result<(), ValidationError> {
    if lab.slots.is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "slots".to_string(),
            value: "[]".to_string(),
            reason: "a lab needs at least one slot".to_string(),
        });
    }

    let mut slot_ids = HashSet::new();
    for slot in &lab.slots {
        validate_slot(slot, lab.version)?;
        if !slot_ids.insert(slot.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: slot.id.clone(),
                context: "slots".to_string(),
            });
        }
    }

    if !lab.slots.iter().any(SlotDef::is_required) {
        return Err(ValidationError::InvalidValue {
            field: "slots".to_string(),
            value: format!("{} slots", lab.slots.len()),
            reason: "at least one slot must be required".to_string(),
        });
    }

    Ok(())
}

fn validate_slot(slot: &SlotDef, version: u32) -> Result<(), ValidationError> {
    if slot.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "slot id".to_string(),
            value: slot.id.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    if version >= 1 && slot.required.is_none() {
        return Err(ValidationError::InvalidValue {
            field: format!("slot '{}' required", slot.id),
            value: "<missing>".to_string(),
            reason: "must be set explicitly since version 1".to_string(),
        });
    }

    Ok(())
}

fn validate_parameter(param: &ParameterDef) -> Result<(), ValidationError> {
    if param.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "parameter id".to_string(),
            value: param.id.clone(),
            reason: "must not be blank".to_string(),
        });
    }

    for (name, value) in [("min", param.min), ("max", param.max), ("default", param.default)] {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: format!("parameter '{}' {}", param.id, name),
                value: value.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    if param.min >= param.max {
        return Err(ValidationError::InvalidValue {
            field: format!("parameter '{}' min/max", param.id),
            value: format!("{}..{}", param.min, param.max),
            reason: "min must be below max".to_string(),
        });
    }

    if let Some(step) = param.step
        && (!step.is_finite() || step <= 0.0)
    {
        return Err(ValidationError::InvalidValue {
            field: format!("parameter '{}' step", param.id),
            value: step.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }

    if param.default < param.min || param.default > param.max {
        return Err(ValidationError::InvalidValue {
            field: format!("parameter '{}' default", param.id),
            value: param.default.to_string(),
            reason: format!("must lie within [{}, {}]", param.min, param.max),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{mesh_lab, ohm_lab};

    #[test]
    fn presets_are_valid() {
        validate_lab(&ohm_lab()).unwrap();
        validate_lab(&mesh_lab()).unwrap();
    }

    #[test]
    fn duplicate_slot_rejected() {
        let mut lab = ohm_lab();
        let dup = lab.slots[1].clone();
        lab.slots.push(dup);
        assert!(matches!(
            validate_lab(&lab),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn missing_variant_parameter_rejected() {
        let mut lab = mesh_lab();
        lab.parameters.retain(|p| p.id != "r3");
        let err = validate_lab(&lab).unwrap_err();
        assert!(err.to_string().contains("r3"));
    }

    #[test]
    fn default_outside_bounds_rejected() {
        let mut lab = ohm_lab();
        lab.parameters[0].default = 1e6;
        assert!(matches!(
            validate_lab(&lab),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let mut lab = ohm_lab();
        lab.parameters[1].min = 2000.0;
        let err = validate_lab(&lab).unwrap_err();
        assert!(err.to_string().contains("min must be below max"));
    }

    #[test]
    fn all_prefilled_rejected() {
        let mut lab = ohm_lab();
        for slot in &mut lab.slots {
            slot.required = Some(false);
        }
        assert!(validate_lab(&lab).is_err());
    }

    #[test]
    fn future_version_rejected() {
        let mut lab = ohm_lab();
        lab.version = 99;
        assert!(matches!(
            validate_lab(&lab),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        ));
    }
}
