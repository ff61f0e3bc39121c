//! Reservation wizard: step definitions, validation, and the controller
//! that drives step transitions.
//!
//! The wizard walks through five steps (name, wheel count, vehicle type,
//! model, date range). The wheel-count and vehicle-type steps feed the
//! [`OptionCascade`]: changing either one clears every answer and option
//! list that depended on it and issues a fetch for the next list.
//!
//! All mutation goes through [`WizardController`]. Its synchronous methods
//! return a [`PendingFetch`] where a network call is needed; the caller runs
//! it and passes the result back to [`WizardController::complete`]. The
//! `*_with` helpers do that round trip in one call.

use serde::Serialize;

use crate::booking::{DateRange, RenterName};
use crate::cascade::{ApplyOutcome, CascadeSlot, FetchCompletion, OptionCascade, PendingFetch};
use crate::collaborator::RentalCollaborator;
use crate::error::CoreError;
use crate::submit::{BookingSubmitter, SubmitFailure, SubmitOutcome};
use crate::types::EntityId;
use crate::vehicle::WheelCount;

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// The five steps of the reservation wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Name,
    Wheels,
    VehicleType,
    Model,
    DateRange,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: usize = 5;

impl WizardStep {
    /// All steps in wizard order.
    pub const ALL: [WizardStep; TOTAL_STEPS] = [
        WizardStep::Name,
        WizardStep::Wheels,
        WizardStep::VehicleType,
        WizardStep::Model,
        WizardStep::DateRange,
    ];

    /// The last step. Submitting happens from here.
    pub const FINAL: WizardStep = WizardStep::DateRange;

    /// Convert a 0-based step index to a `WizardStep`.
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            CoreError::Validation(format!(
                "Invalid step index {index}. Must be between 0 and {}",
                TOTAL_STEPS - 1
            ))
        })
    }

    /// 0-based position of the step.
    pub fn index(self) -> usize {
        match self {
            Self::Name => 0,
            Self::Wheels => 1,
            Self::VehicleType => 2,
            Self::Model => 3,
            Self::DateRange => 4,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Enter Name",
            Self::Wheels => "Select Number of Wheels",
            Self::VehicleType => "Select Type of Vehicle",
            Self::Model => "Select Model",
            Self::DateRange => "Select Date Range",
        }
    }

    pub fn next(self) -> Option<Self> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<Self> {
        self.index().checked_sub(1).map(|i| Self::ALL[i])
    }
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

/// Everything the user has entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub name: RenterName,
    pub wheels: Option<WheelCount>,
    pub vehicle_type: Option<EntityId>,
    pub model: Option<EntityId>,
    pub dates: DateRange,
}

/// A value for one step, as passed to [`WizardController::set_answer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Name(RenterName),
    Wheels(WheelCount),
    VehicleType(EntityId),
    Model(EntityId),
    Dates(DateRange),
}

impl Answer {
    pub fn step(&self) -> WizardStep {
        match self {
            Self::Name(_) => WizardStep::Name,
            Self::Wheels(_) => WizardStep::Wheels,
            Self::VehicleType(_) => WizardStep::VehicleType,
            Self::Model(_) => WizardStep::Model,
            Self::Dates(_) => WizardStep::DateRange,
        }
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the answer for `step` against its rule.
///
/// The vehicle-type and model rules also require the chosen value to be one
/// of the options currently offered by `candidates`. Never mutates anything.
pub fn validate_step(
    step: WizardStep,
    answers: &Answers,
    candidates: &OptionCascade,
) -> Result<(), CoreError> {
    let invalid = |msg: &str| Err(CoreError::Validation(msg.to_string()));

    match step {
        WizardStep::Name => {
            if !answers.name.is_complete() {
                return invalid("Please enter both first and last name.");
            }
        }
        WizardStep::Wheels => {
            if answers.wheels.is_none() {
                return invalid("Please select the number of wheels.");
            }
        }
        WizardStep::VehicleType => match &answers.vehicle_type {
            None => return invalid("Please select a vehicle type."),
            Some(id) if !candidates.offers_type(id) => {
                return invalid("The selected vehicle type is not available. Please choose another.");
            }
            Some(_) => {}
        },
        WizardStep::Model => match &answers.model {
            None => return invalid("Please select a vehicle model."),
            Some(id) if !candidates.offers_model(id) => {
                return invalid("The selected model is not available. Please choose another.");
            }
            Some(_) => {}
        },
        WizardStep::DateRange => {
            if !answers.dates.is_complete() {
                return invalid("Please select a date range.");
            }
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Whether the wizard is still collecting input or has been submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardPhase {
    Collecting,
    Submitted,
}

/// The wizard's single source of truth. Read-only outside the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    step: WizardStep,
    answers: Answers,
    error: Option<String>,
    phase: WizardPhase,
    confirmation: Option<String>,
}

impl WizardState {
    fn new() -> Self {
        Self {
            step: WizardStep::Name,
            answers: Answers::default(),
            error: None,
            phase: WizardPhase::Collecting,
            confirmation: None,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn step_index(&self) -> usize {
        self.step.index()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == WizardPhase::Submitted
    }

    /// Confirmation message from a successful submit.
    pub fn confirmation(&self) -> Option<&str> {
        self.confirmation.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Result of a successful [`WizardController::advance`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    /// Active step after the transition.
    pub step: WizardStep,
    /// Fetch for the next step's options, when the advanced step cascades.
    pub fetch: Option<PendingFetch>,
}

/// Drives the wizard through its steps.
#[derive(Debug, Clone)]
pub struct WizardController {
    state: WizardState,
    cascade: OptionCascade,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    /// A fresh session at step 0 with no answers.
    pub fn new() -> Self {
        Self {
            state: WizardState::new(),
            cascade: OptionCascade::new(),
        }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn cascade(&self) -> &OptionCascade {
        &self.cascade
    }

    /// Validate the active step without changing anything.
    pub fn validate_active_step(&self) -> Result<(), CoreError> {
        validate_step(self.state.step, &self.state.answers, &self.cascade)
    }

    /// Record an answer.
    ///
    /// A new wheel count or vehicle type immediately clears the answers and
    /// option lists downstream of it and returns the fetch for its dependent
    /// list. Re-selecting the value already in effect changes nothing
    /// (unless its list failed to load, in which case the fetch is retried).
    /// A vehicle type that is not among the offered types is recorded but
    /// fetches nothing; validation rejects it on advance.
    pub fn set_answer(&mut self, answer: Answer) -> Option<PendingFetch> {
        if self.state.is_submitted() {
            tracing::warn!(step = ?answer.step(), "Ignoring answer for a submitted booking");
            return None;
        }

        let answers = &mut self.state.answers;
        match answer {
            Answer::Name(name) => {
                answers.name = name;
                None
            }
            Answer::Wheels(wheels) => {
                if answers.wheels == Some(wheels) && self.cascade.vehicle_types().is_bound_to(&wheels)
                {
                    return None;
                }
                answers.wheels = Some(wheels);
                answers.vehicle_type = None;
                answers.model = None;
                Some(self.cascade.request_types(wheels))
            }
            Answer::VehicleType(type_id) => {
                if answers.vehicle_type.as_ref() == Some(&type_id)
                    && self.cascade.vehicle_models().is_bound_to(&type_id)
                {
                    return None;
                }
                answers.vehicle_type = Some(type_id.clone());
                answers.model = None;
                if self.cascade.offers_type(&type_id) {
                    Some(self.cascade.request_models(type_id))
                } else {
                    tracing::debug!(type_id = %type_id, "Vehicle type not offered, skipping model fetch");
                    self.cascade.invalidate(CascadeSlot::VehicleModels);
                    None
                }
            }
            Answer::Model(model) => {
                answers.model = Some(model);
                None
            }
            Answer::Dates(dates) => {
                answers.dates = dates;
                None
            }
        }
    }

    /// Validate the active step and move to the next one.
    ///
    /// On failure the reason is stored in the state's `error` and the step
    /// stays put. On success `error` is cleared; advancing past the wheel
    /// count or vehicle type always refetches the dependent option list and
    /// clears every answer downstream of it, even when the selection did not
    /// change. A valid advance on the final step keeps the wizard there;
    /// completion goes through [`submit_with`](Self::submit_with).
    pub fn advance(&mut self) -> Result<Transition, CoreError> {
        if self.state.is_submitted() {
            return Err(CoreError::Conflict(
                "This booking has already been submitted.".to_string(),
            ));
        }

        let step = self.state.step;
        if let Err(err) = self.validate_active_step() {
            tracing::debug!(step = ?step, error = %err, "Step validation failed");
            self.state.error = Some(err.message());
            return Err(err);
        }
        self.state.error = None;

        let answers = &self.state.answers;
        let fetch = match (step, answers.wheels, answers.vehicle_type.clone()) {
            (WizardStep::Wheels, Some(wheels), _) => Some(self.reload_types(wheels)),
            (WizardStep::VehicleType, _, Some(type_id)) => Some(self.reload_models(type_id)),
            _ => None,
        };

        if let Some(next) = step.next() {
            self.state.step = next;
            tracing::debug!(from = ?step, to = ?next, "Wizard advanced");
        }

        Ok(Transition {
            step: self.state.step,
            fetch,
        })
    }

    /// Go back one step. Does not validate and keeps every answer.
    pub fn retreat(&mut self) -> WizardStep {
        if !self.state.is_submitted() {
            if let Some(previous) = self.state.step.previous() {
                self.state.step = previous;
            }
        }
        self.state.step
    }

    /// Apply a finished option-list fetch. Failures surface in `error`;
    /// stale completions are dropped silently.
    pub fn complete(&mut self, completion: FetchCompletion) -> ApplyOutcome {
        let outcome = self.cascade.apply(completion);
        if let ApplyOutcome::Applied {
            failure: Some(reason),
        } = &outcome
        {
            self.state.error = Some(reason.clone());
        }
        outcome
    }

    /// [`set_answer`](Self::set_answer) and, if it cascades, load the
    /// dependent list.
    pub async fn select_with<C: RentalCollaborator>(
        &mut self,
        api: &C,
        answer: Answer,
    ) -> Option<ApplyOutcome> {
        let fetch = self.set_answer(answer)?;
        let completion = fetch.run(api).await;
        Some(self.complete(completion))
    }

    /// [`advance`](Self::advance) and, if it cascades, load the dependent
    /// list before returning the new step.
    pub async fn advance_with<C: RentalCollaborator>(
        &mut self,
        api: &C,
    ) -> Result<WizardStep, CoreError> {
        let transition = self.advance()?;
        if let Some(fetch) = transition.fetch {
            let completion = fetch.run(api).await;
            self.complete(completion);
        }
        Ok(transition.step)
    }

    /// Submit the booking from the final step.
    ///
    /// Success moves the wizard to [`WizardPhase::Submitted`]; any failure
    /// leaves it on the final step with the reason in `error` so the user
    /// can correct the data or retry.
    pub async fn submit_with<C: RentalCollaborator>(&mut self, api: &C) -> SubmitOutcome {
        if self.state.is_submitted() {
            return SubmitOutcome::Failed {
                reason: SubmitFailure::Invalid,
                message: "This booking has already been submitted.".to_string(),
            };
        }
        if self.state.step != WizardStep::FINAL {
            let outcome = SubmitOutcome::Failed {
                reason: SubmitFailure::Invalid,
                message: "Please complete every step before submitting.".to_string(),
            };
            self.state.error = outcome.failure_message().map(str::to_string);
            return outcome;
        }

        let outcome = BookingSubmitter::new(api).submit(&self.state.answers).await;
        match &outcome {
            SubmitOutcome::Confirmed { message } => {
                self.state.phase = WizardPhase::Submitted;
                self.state.error = None;
                self.state.confirmation = Some(message.clone());
            }
            SubmitOutcome::Failed { message, .. } => {
                self.state.error = Some(message.clone());
            }
        }
        outcome
    }

    fn reload_types(&mut self, wheels: WheelCount) -> PendingFetch {
        self.state.answers.vehicle_type = None;
        self.state.answers.model = None;
        self.cascade.request_types(wheels)
    }

    fn reload_models(&mut self, type_id: EntityId) -> PendingFetch {
        self.state.answers.model = None;
        self.cascade.request_models(type_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
