//! Error types for the cl-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Lab error: {0}")]
    Lab(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Lab not found: {0} (not a preset and no such file)")]
    LabNotFound(String),

    #[error("Board layout error: {0}")]
    Layout(String),

    #[error("Parameter error: {0}")]
    Parameter(String),

    #[error("Not ready: {0}")]
    NotReady(String),

    #[error("Script error: {0}")]
    Script(String),
}

/// Result type for cl-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<cl_project::ProjectError> for AppError {
    fn from(err: cl_project::ProjectError) -> Self {
        AppError::Lab(err.to_string())
    }
}

impl From<cl_circuit::CircuitError> for AppError {
    fn from(err: cl_circuit::CircuitError) -> Self {
        AppError::Layout(err.to_string())
    }
}

impl From<cl_controls::ControlError> for AppError {
    fn from(err: cl_controls::ControlError) -> Self {
        AppError::Parameter(err.to_string())
    }
}

impl From<cl_solver::NotReady> for AppError {
    fn from(err: cl_solver::NotReady) -> Self {
        AppError::NotReady(err.to_string())
    }
}

impl From<cl_core::ClError> for AppError {
    fn from(err: cl_core::ClError) -> Self {
        AppError::Lab(err.to_string())
    }
}
