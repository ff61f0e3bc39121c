use sqlx::SqlitePool;
use rental_core::vehicle::WheelCount;

use crate::models::vehicle_type::VehicleType;

const COLUMNS: &str = "id, name, wheels, created_at";

pub struct VehicleTypeRepo;

impl VehicleTypeRepo {
    /// Vehicle types with the given wheel count, in insertion order.
    pub async fn list_by_wheels(
        pool: &SqlitePool,
        wheels: WheelCount,
    ) -> Result<Vec<VehicleType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vehicle_types WHERE wheels = $1 ORDER BY id");
        sqlx::query_as::<_, VehicleType>(&query)
            .bind(i64::from(wheels.as_u8()))
            .fetch_all(pool)
            .await
    }
}
