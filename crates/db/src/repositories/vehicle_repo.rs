use sqlx::SqlitePool;
use rental_core::types::DbId;

use crate::models::vehicle::Vehicle;

/// Column list for `vehicles` queries.
const COLUMNS: &str = "id, name, vehicle_type_id, created_at";

/// Read access to rentable vehicle models.
pub struct VehicleRepo;

impl VehicleRepo {
    /// Models belonging to a vehicle type, in insertion order. An unknown
    /// type yields an empty list.
    pub async fn list_by_type(
        pool: &SqlitePool,
        vehicle_type_id: DbId,
    ) -> Result<Vec<Vehicle>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM vehicles WHERE vehicle_type_id = $1 ORDER BY id");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(vehicle_type_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Vehicle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1");
        sqlx::query_as::<_, Vehicle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
