//! Table definitions, applied idempotently at startup.

use crate::DbPool;

const STATEMENTS: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS vehicle_types (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        name       TEXT    NOT NULL,
        wheels     INTEGER NOT NULL CHECK (wheels IN (2, 4)),
        created_at TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP,
        CONSTRAINT uq_vehicle_types_name_wheels UNIQUE (name, wheels)
    )",
    "CREATE TABLE IF NOT EXISTS vehicles (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        name            TEXT    NOT NULL,
        vehicle_type_id INTEGER NOT NULL REFERENCES vehicle_types (id) ON DELETE CASCADE,
        created_at      TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE INDEX IF NOT EXISTS idx_vehicles_vehicle_type_id ON vehicles (vehicle_type_id)",
    "CREATE TABLE IF NOT EXISTS bookings (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT    NOT NULL,
        last_name  TEXT    NOT NULL,
        vehicle_id INTEGER NOT NULL REFERENCES vehicles (id),
        start_date TEXT    NOT NULL,
        end_date   TEXT    NOT NULL,
        created_at TEXT    NOT NULL DEFAULT CURRENT_TIMESTAMP
    )",
    "CREATE INDEX IF NOT EXISTS idx_bookings_vehicle_id ON bookings (vehicle_id)",
];

/// Create every table and index that does not exist yet.
pub async fn init_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    for statement in STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    tracing::debug!(statements = STATEMENTS.len(), "Database schema ensured");
    Ok(())
}
