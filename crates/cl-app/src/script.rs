//! Scripted sessions: a list of UI actions replayed in order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::session::LabSession;
use crate::view::LabView;

/// One thing a learner can do on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SessionAction {
    /// Release a dragged component over a slot.
    Drop {
        slot: String,
        component: String,
        #[serde(default = "default_source")]
        source: String,
    },
    /// Replace the text of a parameter field.
    Type { parameter: String, text: String },
    /// Move a parameter's slider.
    Slide { parameter: String, value: f64 },
    /// Press the generate button.
    Generate,
}

fn default_source() -> String {
    "palette".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum StepOutcome {
    Placed,
    Rejected,
    Edited,
    Computed(String),
    NotReady(String),
}

/// Result of one replayed action, with the page as it looks afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub action: SessionAction,
    pub outcome: StepOutcome,
    pub view: LabView,
}

pub fn parse_script(content: &str) -> AppResult<Vec<SessionAction>> {
    serde_yaml::from_str(content).map_err(|e| AppError::Script(e.to_string()))
}

pub fn load_script(path: &Path) -> AppResult<Vec<SessionAction>> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_script(&content)
}

/// Apply `actions` in order. Edits naming an unknown parameter abort the replay.
pub fn replay(session: &mut LabSession, actions: &[SessionAction]) -> AppResult<Vec<StepReport>> {
    let mut reports = Vec::with_capacity(actions.len());

    for (index, action) in actions.iter().enumerate() {
        let outcome = match action {
            SessionAction::Drop {
                slot,
                component,
                source,
            } => {
                if session.drop_transfer(slot, component, source) {
                    StepOutcome::Placed
                } else {
                    StepOutcome::Rejected
                }
            }
            SessionAction::Type { parameter, text } => {
                session
                    .edit_text(parameter, text)
                    .map_err(|e| AppError::Script(format!("step {}: {}", index + 1, e)))?;
                StepOutcome::Edited
            }
            SessionAction::Slide { parameter, value } => {
                session
                    .edit_slider(parameter, *value)
                    .map_err(|e| AppError::Script(format!("step {}: {}", index + 1, e)))?;
                StepOutcome::Edited
            }
            SessionAction::Generate => match session.generate() {
                Ok(evaluation) => StepOutcome::Computed(evaluation.display.clone()),
                Err(reason) => StepOutcome::NotReady(reason.to_string()),
            },
        };

        reports.push(StepReport {
            index,
            action: action.clone(),
            outcome,
            view: session.view(),
        });
    }

    Ok(reports)
}
