//! Lab definition schema.

use cl_core::{ComponentKind, Variant};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LabDef {
    pub version: u32,
    pub name: String,
    pub variant: Variant,
    #[serde(default)]
    pub slots: Vec<SlotDef>,
    #[serde(default)]
    pub parameters: Vec<ParameterDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlotDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub expects: ComponentKind,
    #[serde(default)]
    pub prefilled: bool,
    /// Explicit since version 1; version 0 files left it out.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl SlotDef {
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(!self.prefilled)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParameterDef {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub unit: String,
    pub min: f64,
    pub max: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub default: f64,
}

impl LabDef {
    pub fn slot(&self, id: &str) -> Option<&SlotDef> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn parameter(&self, id: &str) -> Option<&ParameterDef> {
        self.parameters.iter().find(|p| p.id == id)
    }
}
