//! Handlers for creating and listing bookings.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use validator::Validate;

use rental_db::models::booking::{Booking, CreateBooking};
use rental_db::repositories::{BookingRepo, VehicleRepo};

use crate::error::{AppError, AppResult};
use crate::response::CreatedResponse;
use crate::state::AppState;

pub const BOOKING_CONFIRMED: &str = "Booking confirmed";

// ---------------------------------------------------------------------------
// POST /booking
// ---------------------------------------------------------------------------

/// Create a booking for the model named in the body.
///
/// Names must be non-blank and `model` must reference an existing vehicle.
/// Availability and date order are not checked.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(body): Json<CreateBooking>,
) -> AppResult<impl IntoResponse> {
    let body = body.normalized();
    body.validate()?;

    let vehicle = match body.model.as_db_id() {
        Some(id) => VehicleRepo::find_by_id(&state.pool, id).await?,
        None => None,
    }
    .ok_or_else(|| AppError::NotFound("Vehicle not found".into()))?;

    let booking = BookingRepo::create(&state.pool, vehicle.id, &body).await?;

    tracing::info!(
        booking_id = booking.id,
        vehicle_id = vehicle.id,
        start_date = %booking.start_date,
        end_date = %booking.end_date,
        "Booking created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: BOOKING_CONFIRMED,
            data: booking,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /booking
// ---------------------------------------------------------------------------

/// All bookings as a bare JSON array, oldest first.
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<Booking>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    Ok(Json(bookings))
}
