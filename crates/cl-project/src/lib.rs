//! cl-project: lab definition file format and validation.

pub mod migrate;
pub mod presets;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use presets::{PRESET_NAMES, mesh_lab, ohm_lab, preset};
pub use schema::*;
pub use validate::{ValidationError, validate_lab};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Unsupported file extension: {path}")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn parse_yaml(content: &str) -> ProjectResult<LabDef> {
    let lab: LabDef = serde_yaml::from_str(content)?;
    finish_load(lab)
}

pub fn parse_json(content: &str) -> ProjectResult<LabDef> {
    let lab: LabDef = serde_json::from_str(content)?;
    finish_load(lab)
}

fn finish_load(lab: LabDef) -> ProjectResult<LabDef> {
    let lab = migrate_to_latest(lab)?;
    validate_lab(&lab)?;
    Ok(lab)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<LabDef> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &std::path::Path, lab: &LabDef) -> ProjectResult<()> {
    validate_lab(lab)?;
    let content = serde_yaml::to_string(lab)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<LabDef> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &std::path::Path, lab: &LabDef) -> ProjectResult<()> {
    validate_lab(lab)?;
    let content = serde_json::to_string_pretty(lab)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load a lab, picking the format from the file extension.
pub fn load_lab(path: &std::path::Path) -> ProjectResult<LabDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}
