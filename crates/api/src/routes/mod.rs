pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// GET  /vehicle-type?wheels=2|4    list vehicle types
/// GET  /vehicles?id={typeId}       list models of a type
/// POST /booking                    create booking
/// GET  /booking                    list bookings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/vehicle-type",
            get(handlers::vehicle_type::list_by_wheels),
        )
        .route("/vehicles", get(handlers::vehicle::list_by_type))
        .route(
            "/booking",
            get(handlers::booking::list_bookings).post(handlers::booking::create_booking),
        )
}
