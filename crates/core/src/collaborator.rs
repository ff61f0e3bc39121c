//! Boundary to the rental REST API the wizard depends on.
//!
//! The core never talks HTTP itself. It is generic over a
//! [`RentalCollaborator`], implemented over reqwest in `rental-client` and by
//! in-memory fakes in tests. Implementations are expected to normalize the
//! API's response envelopes so every list call yields a plain `Vec`.

use std::future::Future;

use crate::booking::{Booking, BookingPayload, BookingReceipt};
use crate::types::EntityId;
use crate::vehicle::{VehicleModel, VehicleType, WheelCount};

/// Errors reported by a collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollaboratorError {
    /// No response was received (connection refused, DNS, TLS, reset, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("Rental API error ({status}): {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected {
        status: u16,
        /// The `message` field of the error body, when one was sent.
        message: Option<String>,
    },

    /// A 2xx response whose body could not be decoded.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// The four calls the wizard and the booking listing make.
pub trait RentalCollaborator: Send + Sync {
    /// `GET /api/vehicle-type?wheels={2|4}`
    fn vehicle_types(
        &self,
        wheels: WheelCount,
    ) -> impl Future<Output = Result<Vec<VehicleType>, CollaboratorError>> + Send;

    /// `GET /api/vehicles?id={typeId}`
    fn vehicles(
        &self,
        type_id: &EntityId,
    ) -> impl Future<Output = Result<Vec<VehicleModel>, CollaboratorError>> + Send;

    /// `POST /api/booking`
    fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> impl Future<Output = Result<BookingReceipt, CollaboratorError>> + Send;

    /// `GET /api/booking`
    fn bookings(&self) -> impl Future<Output = Result<Vec<Booking>, CollaboratorError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_display_includes_message() {
        let err = CollaboratorError::Rejected {
            status: 409,
            message: Some("Vehicle unavailable".into()),
        };
        assert_eq!(err.to_string(), "Rental API error (409): Vehicle unavailable");
    }

    #[test]
    fn rejected_display_without_message() {
        let err = CollaboratorError::Rejected {
            status: 500,
            message: None,
        };
        assert_eq!(err.to_string(), "Rental API error (500): <no message>");
    }
}
