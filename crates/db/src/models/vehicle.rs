use serde::Serialize;
use sqlx::FromRow;
use rental_core::types::{DbId, Timestamp};

/// A row from the `vehicles` table: one rentable model of a vehicle type.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: DbId,
    pub name: String,
    pub vehicle_type_id: DbId,
    pub created_at: Timestamp,
}
