//! Handlers for listing vehicle types by wheel count.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use rental_core::vehicle::WheelCount;
use rental_db::models::vehicle_type::VehicleType;
use rental_db::repositories::VehicleTypeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WheelsParams {
    pub wheels: Option<String>,
}

/// GET /vehicle-type?wheels=2|4
pub async fn list_by_wheels(
    State(state): State<AppState>,
    Query(params): Query<WheelsParams>,
) -> AppResult<Json<DataResponse<Vec<VehicleType>>>> {
    let raw = params
        .wheels
        .ok_or_else(|| AppError::BadRequest("Query parameter 'wheels' is required".into()))?;
    let wheels: WheelCount = raw.parse()?;

    let types = VehicleTypeRepo::list_by_wheels(&state.pool, wheels).await?;
    tracing::debug!(%wheels, count = types.len(), "Listed vehicle types");

    Ok(Json(DataResponse { data: types }))
}
