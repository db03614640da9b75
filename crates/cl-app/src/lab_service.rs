//! Lab lookup, validation and session creation.

use std::path::Path;

use cl_core::Variant;
use cl_project::LabDef;

use crate::error::{AppError, AppResult};
use crate::session::LabSession;

/// Summary of a lab for listing.
#[derive(Debug, Clone)]
pub struct LabSummary {
    pub key: &'static str,
    pub name: String,
    pub variant: Variant,
    pub slot_count: usize,
    pub required_slots: Vec<String>,
    pub parameters: Vec<String>,
}

/// Built-in labs with their lookup keys.
pub fn list_presets() -> Vec<LabSummary> {
    cl_project::PRESET_NAMES
        .iter()
        .filter_map(|key| cl_project::preset(key).map(|lab| summarize(key, &lab)))
        .collect()
}

fn summarize(key: &'static str, lab: &LabDef) -> LabSummary {
    LabSummary {
        key,
        name: lab.name.clone(),
        variant: lab.variant,
        slot_count: lab.slots.len(),
        required_slots: lab
            .slots
            .iter()
            .filter(|s| s.is_required())
            .map(|s| s.id.clone())
            .collect(),
        parameters: lab.parameters.iter().map(|p| p.id.clone()).collect(),
    }
}

/// A preset name (`ohm`, `mesh`) or a path to a `.yaml`/`.json` lab file.
pub fn resolve_lab(spec: &str) -> AppResult<LabDef> {
    if let Some(lab) = cl_project::preset(spec) {
        return Ok(lab);
    }
    let path = Path::new(spec);
    if !path.exists() {
        return Err(AppError::LabNotFound(spec.to_string()));
    }
    Ok(cl_project::load_lab(path)?)
}

/// Load and validate a lab file without opening a session.
pub fn validate_lab_file(path: &Path) -> AppResult<LabDef> {
    let lab = cl_project::load_lab(path)?;
    // Building a session catches anything the schema check lets through.
    LabSession::from_lab(&lab)?;
    Ok(lab)
}

pub fn session_for(spec: &str) -> AppResult<LabSession> {
    LabSession::from_lab(&resolve_lab(spec)?)
}
