//! Shared response envelope types for API handlers.
//!
//! Catalog lists use a `{ "data": ... }` envelope; the booking list is a
//! bare array, which is what existing clients expect.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// `{ "message": ..., "data": T }` envelope for create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedResponse<T: Serialize> {
    pub message: &'static str,
    pub data: T,
}
