//! Presentation-agnostic snapshot of the wizard for rendering.

use serde::Serialize;

use crate::types::EntityId;
use crate::wizard::{Answers, WizardController, WizardStep};

/// One entry of the step indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepView {
    pub index: usize,
    pub label: &'static str,
    pub active: bool,
    pub completed: bool,
}

/// One selectable option of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: EntityId,
    pub label: String,
}

impl OptionView {
    fn new(value: &EntityId, name: &str) -> Self {
        // Fall back to the id for unnamed entries.
        let label = if name.trim().is_empty() {
            value.to_string()
        } else {
            name.to_string()
        };
        Self {
            value: value.clone(),
            label,
        }
    }
}

/// Everything a front end needs to draw the current wizard screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardView {
    pub steps: Vec<StepView>,
    pub active_step: usize,
    pub answers: Answers,
    pub wheel_options: Vec<u8>,
    pub vehicle_type_options: Vec<OptionView>,
    pub model_options: Vec<OptionView>,
    pub loading_vehicle_types: bool,
    pub loading_models: bool,
    pub error: Option<String>,
    pub can_go_back: bool,
    /// The final step shows "Submit" instead of "Next" until the booking
    /// is submitted.
    pub show_submit: bool,
    pub submitted: bool,
    pub confirmation: Option<String>,
}

impl WizardController {
    pub fn view(&self) -> WizardView {
        let state = self.state();
        let cascade = self.cascade();
        let active = state.step();
        let submitted = state.is_submitted();

        WizardView {
            steps: WizardStep::ALL
                .iter()
                .map(|&step| StepView {
                    index: step.index(),
                    label: step.label(),
                    active: step == active && !submitted,
                    completed: step < active || submitted,
                })
                .collect(),
            active_step: active.index(),
            answers: state.answers().clone(),
            wheel_options: crate::vehicle::WheelCount::ALL
                .iter()
                .map(|w| w.as_u8())
                .collect(),
            vehicle_type_options: cascade
                .vehicle_types()
                .items()
                .iter()
                .map(|t| OptionView::new(&t.id, &t.name))
                .collect(),
            model_options: cascade
                .vehicle_models()
                .items()
                .iter()
                .map(|m| OptionView::new(&m.id, &m.name))
                .collect(),
            loading_vehicle_types: cascade.vehicle_types().is_loading(),
            loading_models: cascade.vehicle_models().is_loading(),
            error: state.error().map(str::to_string),
            can_go_back: active.previous().is_some() && !submitted,
            show_submit: active == WizardStep::FINAL && !submitted,
            submitted,
            confirmation: state.confirmation().map(str::to_string),
        }
    }
}
