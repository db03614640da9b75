//! Built-in labs matching the two classroom pages.

use cl_core::{ComponentKind, Variant};

use crate::migrate::LATEST_VERSION;
use crate::schema::{LabDef, ParameterDef, SlotDef};

pub const PRESET_NAMES: [&str; 2] = ["ohm", "mesh"];

/// Look up a built-in lab by short name or variant name.
pub fn preset(name: &str) -> Option<LabDef> {
    match name.parse::<Variant>().ok()? {
        Variant::OhmPower => Some(ohm_lab()),
        Variant::MeshCurrent => Some(mesh_lab()),
    }
}

/// Battery already wired; the learner adds the resistor and the LED.
pub fn ohm_lab() -> LabDef {
    LabDef {
        version: LATEST_VERSION,
        name: "Ohm's law: LED power".to_string(),
        variant: Variant::OhmPower,
        slots: vec![
            slot("battery", "Battery", ComponentKind::Battery, true),
            slot("resistor", "R", ComponentKind::Resistor, false),
            slot("led", "LED", ComponentKind::Led, false),
        ],
        parameters: vec![
            param("v", "Voltage", "V", 0.0, 12.0, 0.1, 5.0),
            param("r", "Resistance", "Ω", 1.0, 1000.0, 1.0, 100.0),
        ],
    }
}

/// Two-loop network; `V2` and `R2` are missing until the learner drops them.
pub fn mesh_lab() -> LabDef {
    LabDef {
        version: LATEST_VERSION,
        name: "Kirchhoff: mesh analysis".to_string(),
        variant: Variant::MeshCurrent,
        slots: vec![
            slot("v1", "V1", ComponentKind::Battery, true),
            slot("v2", "V2", ComponentKind::Battery, false),
            slot("r1", "R1", ComponentKind::Resistor, true),
            slot("r2", "R2", ComponentKind::Resistor, false),
            slot("r3", "R3", ComponentKind::Resistor, true),
        ],
        parameters: vec![
            param("v1", "Source V1", "V", 1.0, 24.0, 0.5, 10.0),
            param("v2", "Source V2", "V", 1.0, 24.0, 0.5, 5.0),
            param("r1", "Resistor R1", "Ω", 1.0, 100.0, 1.0, 2.0),
            param("r2", "Resistor R2", "Ω", 1.0, 100.0, 1.0, 3.0),
            param("r3", "Resistor R3", "Ω", 1.0, 100.0, 1.0, 1.0),
        ],
    }
}

fn slot(id: &str, label: &str, expects: ComponentKind, prefilled: bool) -> SlotDef {
    SlotDef {
        id: id.to_string(),
        label: Some(label.to_string()),
        expects,
        prefilled,
        required: Some(!prefilled),
    }
}

fn param(
    id: &str,
    label: &str,
    unit: &str,
    min: f64,
    max: f64,
    step: f64,
    default: f64,
) -> ParameterDef {
    ParameterDef {
        id: id.to_string(),
        label: label.to_string(),
        unit: unit.to_string(),
        min,
        max,
        step: Some(step),
        default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_lookup() {
        assert_eq!(preset("ohm").unwrap().variant, Variant::OhmPower);
        assert_eq!(preset("mesh_current").unwrap().variant, Variant::MeshCurrent);
        assert!(preset("rlc").is_none());
    }

    #[test]
    fn mesh_requires_v2_and_r2() {
        let lab = mesh_lab();
        let required: Vec<&str> = lab
            .slots
            .iter()
            .filter(|s| s.is_required())
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(required, ["v2", "r2"]);
    }
}
