use serde::Serialize;
use sqlx::FromRow;
use rental_core::types::{DbId, Timestamp};

/// A row from the `vehicle_types` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    pub id: DbId,
    pub name: String,
    pub wheels: i64,
    pub created_at: Timestamp,
}
