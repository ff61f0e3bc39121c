//! Turning collected wizard answers into a created booking.

use crate::booking::BookingPayload;
use crate::collaborator::{CollaboratorError, RentalCollaborator};
use crate::wizard::Answers;

/// Shown when the API confirms without a message of its own.
pub const DEFAULT_CONFIRMATION: &str = "Booking submitted successfully.";

/// Shown when the API rejects the booking without a message.
pub const GENERIC_FAILURE: &str = "Error submitting form.";

/// Shown when no usable response came back.
pub const RETRY_LATER: &str = "Error submitting form. Please try again later.";

/// Why a submission did not go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFailure {
    /// The answers were incomplete; nothing was sent.
    Invalid,
    /// The API answered with a non-2xx status.
    Rejected,
    /// No (readable) response.
    Transport,
}

/// User-facing result of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Confirmed { message: String },
    Failed { reason: SubmitFailure, message: String },
}

impl SubmitOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, Self::Confirmed { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Confirmed { message } | Self::Failed { message, .. } => message,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Confirmed { .. } => None,
            Self::Failed { message, .. } => Some(message),
        }
    }
}

/// Posts a booking built from the wizard's answers.
pub struct BookingSubmitter<'a, C> {
    api: &'a C,
}

impl<'a, C: RentalCollaborator> BookingSubmitter<'a, C> {
    pub fn new(api: &'a C) -> Self {
        Self { api }
    }

    /// Build the payload and create the booking.
    ///
    /// The date range is checked again here even though the wizard gates it,
    /// since the final step can be submitted without advancing it first.
    pub async fn submit(&self, answers: &Answers) -> SubmitOutcome {
        let payload =
            match BookingPayload::build(&answers.name, answers.model.as_ref(), &answers.dates) {
                Ok(payload) => payload,
                Err(err) => {
                    return SubmitOutcome::Failed {
                        reason: SubmitFailure::Invalid,
                        message: err.message(),
                    }
                }
            };

        match self.api.create_booking(&payload).await {
            Ok(receipt) => {
                tracing::info!(
                    model = %payload.model,
                    start_date = %payload.dates.start_date,
                    end_date = %payload.dates.end_date,
                    "Booking created"
                );
                let message = receipt
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_CONFIRMATION.to_string());
                SubmitOutcome::Confirmed { message }
            }
            Err(CollaboratorError::Rejected { status, message }) => {
                tracing::warn!(status, message = ?message, "Booking rejected by rental API");
                SubmitOutcome::Failed {
                    reason: SubmitFailure::Rejected,
                    message: message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Error submitting booking");
                SubmitOutcome::Failed {
                    reason: SubmitFailure::Transport,
                    message: RETRY_LATER.to_string(),
                }
            }
        }
    }
}
