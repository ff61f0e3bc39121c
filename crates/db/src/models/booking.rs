//! Booking entity and the create DTO accepted by `POST /api/booking`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use rental_core::booking::BookingDates;
use rental_core::types::{Date, DbId, EntityId, Timestamp};

/// A row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub vehicle_id: DbId,
    pub start_date: Date,
    pub end_date: Date,
    pub created_at: Timestamp,
}

/// DTO for creating a booking, in the wizard's wire shape.
///
/// `model` names the vehicle being rented. Date order is not checked.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBooking {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    pub dates: BookingDates,
    pub model: EntityId,
}

impl CreateBooking {
    /// Trim surrounding whitespace from the names so blank input fails
    /// validation.
    pub fn normalized(mut self) -> Self {
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self
    }
}
