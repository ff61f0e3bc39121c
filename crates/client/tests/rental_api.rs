//! Integration tests for [`RentalApi`] against an in-process canned server.
//!
//! The server speaks the rental API's wire format, including its mixed list
//! envelopes, so these tests exercise the reqwest adapter end to end and
//! drive the wizard through it.

use std::collections::HashMap;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use rental_client::RentalApi;
use rental_core::booking::{DateRange, RenterName};
use rental_core::collaborator::{CollaboratorError, RentalCollaborator};
use rental_core::listing::BookingListing;
use rental_core::submit::{SubmitFailure, SubmitOutcome};
use rental_core::types::EntityId;
use rental_core::vehicle::WheelCount;
use rental_core::wizard::{Answer, WizardController, WizardPhase};

// ---------------------------------------------------------------------------
// Canned server
// ---------------------------------------------------------------------------

async fn vehicle_types(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("wheels").map(String::as_str) {
        Some("4") => Json(json!({ "data": [{ "id": "t1", "name": "SUV" }] })),
        // Two-wheelers come back in a broken envelope.
        _ => Json(json!({ "data": "not an array" })),
    }
}

async fn vehicles(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("id").map(String::as_str) {
        Some("t1") => Json(json!({ "data": [{ "id": "m1", "name": "RAV4" }, { "id": "m2", "name": "Taken" }] })),
        _ => Json(json!({ "data": [] })),
    }
}

async fn create_booking(Json(body): Json<Value>) -> impl IntoResponse {
    if body["model"] == "m1" {
        (StatusCode::CREATED, Json(json!({ "message": "Booking confirmed" })))
    } else {
        (StatusCode::CONFLICT, Json(json!({ "message": "Vehicle unavailable" })))
    }
}

async fn list_bookings() -> Json<Value> {
    Json(json!([
        { "id": 2, "firstName": "Bo", "lastName": "Doe", "vehicleId": 5,
          "startDate": "2024-07-01", "endDate": "2024-07-03" },
        { "id": 1, "firstName": "Al", "lastName": "Doe", "vehicleId": 3,
          "startDate": "2024-06-01", "endDate": "2024-06-05" },
    ]))
}

fn canned_router() -> Router {
    Router::new()
        .route("/api/vehicle-type", get(vehicle_types))
        .route("/api/vehicles", get(vehicles))
        .route("/api/booking", get(list_bookings).post(create_booking))
}

/// Serve `router` on an ephemeral port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A base URL nothing listens on.
async fn dead_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn canned_api() -> RentalApi {
    RentalApi::new(serve(canned_router()).await)
}

// ---------------------------------------------------------------------------
// Adapter behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn vehicle_types_unwraps_data_envelope() {
    let api = canned_api().await;
    let types = api.vehicle_types(WheelCount::Four).await.unwrap();
    assert_eq!(types.len(), 1);
    assert_eq!(types[0].id, EntityId::from("t1"));
    assert_eq!(types[0].name, "SUV");
}

#[tokio::test]
async fn non_array_payload_becomes_empty_list() {
    let api = canned_api().await;
    let types = api.vehicle_types(WheelCount::Two).await.unwrap();
    assert!(types.is_empty());
}

#[tokio::test]
async fn bookings_accepts_bare_array_in_order() {
    let api = canned_api().await;
    let listing = BookingListing::list_all(&api).await;
    assert_eq!(listing.error, None);
    let ids: Vec<_> = listing.bookings.iter().map(|b| b.id.to_string()).collect();
    assert_eq!(ids, ["2", "1"]);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let api = RentalApi::new(dead_url().await);
    let result = api.vehicles(&EntityId::from("t1")).await;
    assert_matches!(result, Err(CollaboratorError::Transport(_)));

    let listing = BookingListing::list_all(&api).await;
    assert!(listing.bookings.is_empty());
    assert!(listing.error.is_some());
}

#[tokio::test]
async fn missing_route_is_rejected_with_status() {
    let api = RentalApi::new(serve(Router::new()).await);
    let result = api.vehicle_types(WheelCount::Four).await;
    assert_matches!(result, Err(CollaboratorError::Rejected { status: 404, .. }));
}

// ---------------------------------------------------------------------------
// Wizard scenarios over HTTP
// ---------------------------------------------------------------------------

async fn wizard_at_final_step(api: &RentalApi, model: &str) -> WizardController {
    let mut wizard = WizardController::new();
    wizard.set_answer(Answer::Name(RenterName::new("Ada", "Lovelace")));
    wizard.advance_with(api).await.unwrap();
    wizard.select_with(api, Answer::Wheels(WheelCount::Four)).await;
    wizard.advance_with(api).await.unwrap();
    wizard.select_with(api, Answer::VehicleType(EntityId::from("t1"))).await;
    wizard.advance_with(api).await.unwrap();
    wizard.set_answer(Answer::Model(EntityId::from(model)));
    wizard.advance_with(api).await.unwrap();
    wizard.set_answer(Answer::Dates(DateRange::new(
        "2024-06-01".parse().unwrap(),
        "2024-06-05".parse().unwrap(),
    )));
    wizard.advance_with(api).await.unwrap();
    wizard
}

#[tokio::test]
async fn full_booking_is_confirmed() {
    let api = canned_api().await;
    let mut wizard = wizard_at_final_step(&api, "m1").await;
    assert_eq!(wizard.state().step_index(), 4);
    assert_eq!(wizard.state().error(), None);

    let outcome = wizard.submit_with(&api).await;

    assert_eq!(
        outcome,
        SubmitOutcome::Confirmed {
            message: "Booking confirmed".into()
        }
    );
    assert_eq!(wizard.state().phase(), WizardPhase::Submitted);
}

#[tokio::test]
async fn rejected_booking_keeps_wizard_on_final_step() {
    let api = canned_api().await;
    let mut wizard = wizard_at_final_step(&api, "m2").await;

    let outcome = wizard.submit_with(&api).await;

    assert_matches!(
        outcome,
        SubmitOutcome::Failed {
            reason: SubmitFailure::Rejected,
            ..
        }
    );
    assert_eq!(wizard.state().step_index(), 4);
    assert_eq!(wizard.state().error(), Some("Vehicle unavailable"));
}

#[tokio::test]
async fn broken_type_envelope_leaves_empty_candidates() {
    let api = canned_api().await;
    let mut wizard = WizardController::new();

    wizard.select_with(&api, Answer::Wheels(WheelCount::Two)).await;

    assert!(wizard.cascade().vehicle_types().items().is_empty());
    assert_eq!(wizard.state().error(), None);
}
