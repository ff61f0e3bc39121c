//! Default vehicle catalog inserted into an empty database.

use rental_core::vehicle::WheelCount;

use crate::DbPool;

/// `(type name, wheel count, model names)`.
pub const DEFAULT_CATALOG: &[(&str, WheelCount, &[&str])] = &[
    (
        "Cruiser",
        WheelCount::Two,
        &["Harley-Davidson Street 750", "Royal Enfield Classic 350"],
    ),
    (
        "Sports",
        WheelCount::Two,
        &["Kawasaki Ninja 300", "Yamaha R15", "KTM RC 390"],
    ),
    (
        "Hatchback",
        WheelCount::Four,
        &["Maruti Swift", "Hyundai i20", "Volkswagen Polo"],
    ),
    (
        "SUV",
        WheelCount::Four,
        &["Toyota Fortuner", "Mahindra XUV700"],
    ),
    (
        "Sedan",
        WheelCount::Four,
        &["Honda City", "Hyundai Verna"],
    ),
];

/// Insert [`DEFAULT_CATALOG`] when no vehicle types exist.
///
/// Returns `true` if the catalog was inserted.
pub async fn seed_catalog(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM vehicle_types")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "Vehicle catalog already present, skipping seed");
        return Ok(false);
    }

    let mut tx = pool.begin().await?;
    let mut vehicles = 0usize;
    for (type_name, wheels, models) in DEFAULT_CATALOG {
        let type_id = sqlx::query("INSERT INTO vehicle_types (name, wheels) VALUES ($1, $2)")
            .bind(*type_name)
            .bind(i64::from(wheels.as_u8()))
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        for model in models.iter() {
            sqlx::query("INSERT INTO vehicles (name, vehicle_type_id) VALUES ($1, $2)")
                .bind(*model)
                .bind(type_id)
                .execute(&mut *tx)
                .await?;
            vehicles += 1;
        }
    }
    tx.commit().await?;

    tracing::info!(
        vehicle_types = DEFAULT_CATALOG.len(),
        vehicles,
        "Seeded default vehicle catalog"
    );
    Ok(true)
}
