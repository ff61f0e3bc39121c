//! In-memory collaborator used by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::booking::{Booking, BookingPayload, BookingReceipt};
use crate::collaborator::{CollaboratorError, RentalCollaborator};
use crate::types::EntityId;
use crate::vehicle::{VehicleModel, VehicleType, WheelCount};

pub(crate) fn vehicle_type(id: &str, name: &str) -> VehicleType {
    VehicleType {
        id: EntityId::from(id),
        name: name.to_string(),
        wheels: None,
    }
}

pub(crate) fn model(id: &str, name: &str) -> VehicleModel {
    VehicleModel {
        id: EntityId::from(id),
        name: name.to_string(),
        vehicle_type_id: None,
    }
}

type Reply<T> = Result<T, CollaboratorError>;

/// Canned responses keyed by request parameters. Unknown keys answer with
/// an empty list; bookings default to a confirmation.
#[derive(Default)]
pub(crate) struct FakeApi {
    types: HashMap<WheelCount, Reply<Vec<VehicleType>>>,
    models: HashMap<EntityId, Reply<Vec<VehicleModel>>>,
    booking_reply: Option<Reply<BookingReceipt>>,
    listing: Option<Reply<Vec<Booking>>>,
    submitted: Mutex<Vec<BookingPayload>>,
}

impl FakeApi {
    pub(crate) fn with_types(mut self, wheels: WheelCount, types: Vec<VehicleType>) -> Self {
        self.types.insert(wheels, Ok(types));
        self
    }

    pub(crate) fn with_types_error(mut self, wheels: WheelCount, err: CollaboratorError) -> Self {
        self.types.insert(wheels, Err(err));
        self
    }

    pub(crate) fn with_models(mut self, type_id: &str, models: Vec<VehicleModel>) -> Self {
        self.models.insert(EntityId::from(type_id), Ok(models));
        self
    }

    pub(crate) fn with_booking_reply(mut self, reply: Reply<BookingReceipt>) -> Self {
        self.booking_reply = Some(reply);
        self
    }

    pub(crate) fn with_listing(mut self, reply: Reply<Vec<Booking>>) -> Self {
        self.listing = Some(reply);
        self
    }

    pub(crate) fn submitted(&self) -> Vec<BookingPayload> {
        self.submitted.lock().unwrap().clone()
    }
}

impl RentalCollaborator for FakeApi {
    async fn vehicle_types(&self, wheels: WheelCount) -> Reply<Vec<VehicleType>> {
        self.types.get(&wheels).cloned().unwrap_or(Ok(Vec::new()))
    }

    async fn vehicles(&self, type_id: &EntityId) -> Reply<Vec<VehicleModel>> {
        self.models.get(type_id).cloned().unwrap_or(Ok(Vec::new()))
    }

    async fn create_booking(&self, payload: &BookingPayload) -> Reply<BookingReceipt> {
        self.submitted.lock().unwrap().push(payload.clone());
        self.booking_reply.clone().unwrap_or_else(|| {
            Ok(BookingReceipt {
                message: Some("Booking confirmed".to_string()),
            })
        })
    }

    async fn bookings(&self) -> Reply<Vec<Booking>> {
        self.listing.clone().unwrap_or(Ok(Vec::new()))
    }
}
