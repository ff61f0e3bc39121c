use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use rental_core::types::EntityId;
use rental_db::models::vehicle::Vehicle;
use rental_db::repositories::VehicleRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// `id` is the vehicle type whose models are requested.
#[derive(Debug, Deserialize)]
pub struct VehicleParams {
    pub id: Option<String>,
}

/// GET /vehicles?id={typeId}
///
/// A type id that matches nothing, numeric or not, yields an empty list.
pub async fn list_by_type(
    State(state): State<AppState>,
    Query(params): Query<VehicleParams>,
) -> AppResult<Json<DataResponse<Vec<Vehicle>>>> {
    let raw = params
        .id
        .ok_or_else(|| AppError::BadRequest("Query parameter 'id' is required".into()))?;

    let vehicles = match EntityId::from(raw).as_db_id() {
        Some(type_id) => VehicleRepo::list_by_type(&state.pool, type_id).await?,
        None => Vec::new(),
    };

    Ok(Json(DataResponse { data: vehicles }))
}
