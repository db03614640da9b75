//! Shared application service layer for circuitlab.
//!
//! This crate is the single owner of a lab's state. Frontends (the CLI, or a
//! page shell forwarding drop and input events) talk to a [`LabSession`] and
//! render its [`LabView`]; they never touch the tracker or parameters directly.

pub mod error;
pub mod lab_service;
pub mod script;
pub mod session;
pub mod view;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use lab_service::{LabSummary, list_presets, resolve_lab, session_for, validate_lab_file};
pub use script::{SessionAction, StepOutcome, StepReport, load_script, parse_script, replay};
pub use session::LabSession;
pub use view::{LabView, LedBand, LedView, ParamView, SlotView, StatusIndicator};
