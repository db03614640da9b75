//! The lab controller: one tracker, one parameter set, one result panel.

use cl_circuit::{DragPayload, LayoutBuilder, PlacementTracker, SlotSpec};
use cl_controls::{NumericParameter, ParameterBounds, ParameterSet};
use cl_core::{ParamId, SlotId, Variant};
use cl_project::LabDef;
use cl_solver::{CircuitModel, Evaluation, NotReady, evaluate, model_for};
use tracing::{debug, info};

use crate::error::AppResult;
use crate::view::{self, LabView};

/// All mutable state of one open lab.
///
/// Every successful placement and every parameter edit clears the result
/// panel back to the placeholder; only [`LabSession::generate`] fills it.
pub struct LabSession {
    name: String,
    variant: Variant,
    tracker: PlacementTracker,
    params: ParameterSet,
    model: Box<dyn CircuitModel>,
    result: Option<Evaluation>,
}

impl std::fmt::Debug for LabSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabSession")
            .field("name", &self.name)
            .field("variant", &self.variant)
            .field("tracker", &self.tracker)
            .field("params", &self.params)
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}

impl LabSession {
    /// Open a session on a validated lab definition.
    pub fn from_lab(lab: &LabDef) -> AppResult<Self> {
        let mut builder = LayoutBuilder::new();
        for slot in &lab.slots {
            builder.add_slot(SlotSpec {
                id: SlotId::new(slot.id.as_str())?,
                label: slot.label.clone(),
                expects: slot.expects,
                prefilled: slot.prefilled,
                required: slot.is_required(),
            })?;
        }
        let tracker = PlacementTracker::new(builder.build()?);

        let mut params = ParameterSet::new();
        for def in &lab.parameters {
            let bounds = ParameterBounds::new(def.min, def.max, def.step)?;
            let param = NumericParameter::new(ParamId::new(def.id.as_str())?, bounds, def.default)?
                .with_label(def.label.as_str(), def.unit.as_str());
            params.insert(param)?;
        }

        debug!(lab = %lab.name, variant = %lab.variant, "session opened");
        Ok(Self {
            name: lab.name.clone(),
            variant: lab.variant,
            tracker,
            params,
            model: model_for(lab.variant),
            result: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn tracker(&self) -> &PlacementTracker {
        &self.tracker
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn is_complete(&self) -> bool {
        self.tracker.is_complete()
    }

    /// Last successful evaluation, if the panel currently shows one.
    pub fn result(&self) -> Option<&Evaluation> {
        self.result.as_ref()
    }

    /// Text of the result panel.
    pub fn display(&self) -> &str {
        self.result
            .as_ref()
            .map_or(self.variant.placeholder(), |e| e.display.as_str())
    }

    /// A component released over `slot`. Returns whether it was accepted.
    pub fn drop_payload(&mut self, slot: &str, payload: &DragPayload) -> bool {
        let was_complete = self.tracker.is_complete();
        if !self
            .tracker
            .try_place_from(slot, payload.component, &payload.source_id)
        {
            return false;
        }

        self.reset_display();
        debug!(slot, component = %payload.component, source = %payload.source_id, "component placed");
        if !was_complete && self.tracker.is_complete() {
            info!(lab = %self.name, "circuit complete");
        }
        true
    }

    /// Same as [`Self::drop_payload`] for the raw strings a drag transfer carries.
    /// A malformed payload is rejected like any other bad drop.
    pub fn drop_transfer(&mut self, slot: &str, component_type: &str, source_id: &str) -> bool {
        match DragPayload::from_transfer(component_type, source_id) {
            Ok(payload) => self.drop_payload(slot, &payload),
            Err(e) => {
                debug!(slot, error = %e, "drop payload rejected");
                false
            }
        }
    }

    /// Keystroke in a parameter's text field.
    pub fn edit_text(&mut self, param: &str, raw: &str) -> AppResult<Option<f64>> {
        let synced = self.params.edit_text(param, raw)?;
        self.reset_display();
        Ok(synced)
    }

    /// Drag of a parameter's slider.
    pub fn edit_slider(&mut self, param: &str, value: f64) -> AppResult<f64> {
        let synced = self.params.edit_slider(param, value)?;
        self.reset_display();
        Ok(synced)
    }

    /// Run the evaluator. On `NotReady` the panel keeps what it shows.
    pub fn generate(&mut self) -> Result<&Evaluation, NotReady> {
        match evaluate(&self.tracker, &self.params, self.model.as_ref()) {
            Ok(evaluation) => {
                info!(lab = %self.name, display = %evaluation.display, "result generated");
                let evaluation: &Evaluation = self.result.insert(evaluation);
                Ok(evaluation)
            }
            Err(reason) => {
                debug!(lab = %self.name, %reason, "generate skipped");
                Err(reason)
            }
        }
    }

    /// Snapshot of everything a frontend draws.
    pub fn view(&self) -> LabView {
        view::render(self)
    }

    fn reset_display(&mut self) {
        self.result = None;
    }
}
