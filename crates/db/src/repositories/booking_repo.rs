use sqlx::SqlitePool;
use rental_core::types::DbId;

use crate::models::booking::{Booking, CreateBooking};

/// Column list for `bookings` queries.
const COLUMNS: &str = "id, first_name, last_name, vehicle_id, start_date, end_date, created_at";

/// Provides create and list operations for bookings.
pub struct BookingRepo;

impl BookingRepo {
    /// Insert a booking for `vehicle_id`, which the caller has already
    /// resolved from `input.model`.
    pub async fn create(
        pool: &SqlitePool,
        vehicle_id: DbId,
        input: &CreateBooking,
    ) -> Result<Booking, sqlx::Error> {
        let query = format!(
            "INSERT INTO bookings (first_name, last_name, vehicle_id, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Booking>(&query)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(vehicle_id)
            .bind(input.dates.start_date)
            .bind(input.dates.end_date)
            .fetch_one(pool)
            .await
    }

    /// All bookings, oldest first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Booking>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM bookings ORDER BY id");
        sqlx::query_as::<_, Booking>(&query).fetch_all(pool).await
    }
}
