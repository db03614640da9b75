//! Schema migration framework.

use crate::ProjectError;
use crate::schema::LabDef;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut lab: LabDef) -> Result<LabDef, ProjectError> {
    while lab.version < LATEST_VERSION {
        lab = migrate_one_version(lab)?;
    }
    Ok(lab)
}

fn migrate_one_version(lab: LabDef) -> Result<LabDef, ProjectError> {
    match lab.version {
        0 => migrate_v0_to_v1(lab),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 had no `required` flag: every slot that was not pre-filled had
/// to be dropped by the learner.
fn migrate_v0_to_v1(mut lab: LabDef) -> Result<LabDef, ProjectError> {
    for slot in &mut lab.slots {
        if slot.required.is_none() {
            slot.required = Some(!slot.prefilled);
        }
    }
    lab.version = 1;
    Ok(lab)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SlotDef;
    use cl_core::{ComponentKind, Variant};

    #[test]
    fn v0_infers_required_from_prefilled() {
        let lab = LabDef {
            version: 0,
            name: "old".to_string(),
            variant: Variant::OhmPower,
            slots: vec![
                SlotDef {
                    id: "battery".to_string(),
                    label: None,
                    expects: ComponentKind::Battery,
                    prefilled: true,
                    required: None,
                },
                SlotDef {
                    id: "led".to_string(),
                    label: None,
                    expects: ComponentKind::Led,
                    prefilled: false,
                    required: None,
                },
            ],
            parameters: vec![],
        };

        let migrated = migrate_to_latest(lab).unwrap();
        assert_eq!(migrated.version, LATEST_VERSION);
        assert_eq!(migrated.slots[0].required, Some(false));
        assert_eq!(migrated.slots[1].required, Some(true));
    }
}
