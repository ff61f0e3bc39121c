//! REST client for the vehicle rental API.
//!
//! Wraps the four rental endpoints using [`reqwest`] and implements
//! [`RentalCollaborator`] so the wizard can run against a live server.
//!
//! The API is inconsistent about list envelopes: vehicle types and vehicles
//! come back as `{ "data": [...] }` while bookings are a bare array. Every
//! list response goes through [`normalize_list`], which accepts either shape
//! and treats anything else as an empty list (logged at `warn`).

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use rental_core::booking::{Booking, BookingPayload, BookingReceipt};
use rental_core::collaborator::{CollaboratorError, RentalCollaborator};
use rental_core::types::EntityId;
use rental_core::vehicle::{VehicleModel, VehicleType, WheelCount};

use crate::config::ClientConfig;

/// HTTP client for one rental API instance.
#[derive(Debug, Clone)]
pub struct RentalApi {
    client: reqwest::Client,
    api_url: String,
}

/// Error body the API sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl RentalApi {
    /// Create a new API client.
    ///
    /// * `api_url` - Base HTTP URL, e.g. `http://localhost:4000`.
    pub fn new(api_url: String) -> Self {
        Self::with_client(reqwest::Client::new(), api_url)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    // ---- private helpers ----

    /// `GET {api_url}{path}` and normalize the list envelope.
    async fn get_list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        resource: &'static str,
    ) -> Result<Vec<T>, CollaboratorError> {
        let response = self
            .client
            .get(format!("{}{path}", self.api_url))
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        let response = Self::ensure_success(response).await?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| CollaboratorError::Malformed(format!("{resource}: {e}")))?;

        normalize_list(body, resource)
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`CollaboratorError::Rejected`] carrying the body's `message`.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, CollaboratorError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| b.message);
        tracing::debug!(status = status.as_u16(), body = %body, "Rental API returned an error status");

        Err(CollaboratorError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Map a reqwest failure that produced no usable response.
fn transport_error(err: reqwest::Error) -> CollaboratorError {
    CollaboratorError::Transport(err.to_string())
}

/// Accept `[...]` or `{ "data": [...] }` and decode the elements.
///
/// Any other payload is an anomaly: it is logged and yields an empty list.
/// Elements that do not decode as `T` are a [`CollaboratorError::Malformed`].
pub fn normalize_list<T: DeserializeOwned>(
    body: Value,
    resource: &str,
) -> Result<Vec<T>, CollaboratorError> {
    let items = match body {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("data") {
            Some(Value::Array(items)) => items,
            data => {
                tracing::warn!(
                    resource,
                    data = ?data,
                    "Expected an array in the data envelope, treating as empty"
                );
                return Ok(Vec::new());
            }
        },
        other => {
            tracing::warn!(resource, payload = %other, "Expected an array, treating as empty");
            return Ok(Vec::new());
        }
    };

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<T>, _>>()
        .map_err(|e| CollaboratorError::Malformed(format!("{resource}: {e}")))
}

impl RentalCollaborator for RentalApi {
    async fn vehicle_types(&self, wheels: WheelCount) -> Result<Vec<VehicleType>, CollaboratorError> {
        self.get_list(
            "/api/vehicle-type",
            &[("wheels", wheels.to_string())],
            "vehicle types",
        )
        .await
    }

    async fn vehicles(&self, type_id: &EntityId) -> Result<Vec<VehicleModel>, CollaboratorError> {
        self.get_list("/api/vehicles", &[("id", type_id.to_string())], "vehicles")
            .await
    }

    async fn create_booking(
        &self,
        payload: &BookingPayload,
    ) -> Result<BookingReceipt, CollaboratorError> {
        let response = self
            .client
            .post(format!("{}/api/booking", self.api_url))
            .json(payload)
            .send()
            .await
            .map_err(transport_error)?;

        let response = Self::ensure_success(response).await?;
        let body = response.text().await.map_err(transport_error)?;
        if body.trim().is_empty() {
            return Ok(BookingReceipt::default());
        }

        // A 2xx means the booking exists; an unreadable body only costs us
        // the confirmation text.
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, body = %body, "Unreadable booking confirmation body");
            BookingReceipt::default()
        }))
    }

    async fn bookings(&self) -> Result<Vec<Booking>, CollaboratorError> {
        self.get_list("/api/booking", &[], "bookings").await
    }
}
