//! Booking records and the payload the wizard submits to create one.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{Date, EntityId};

/// Renter's first and last name as typed into the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenterName {
    pub first: String,
    pub last: String,
}

impl RenterName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }

    /// Both parts present after trimming whitespace.
    pub fn is_complete(&self) -> bool {
        !self.first.trim().is_empty() && !self.last.trim().is_empty()
    }
}

/// Requested rental period. Either end may still be unset while the user
/// is filling in the final step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<Date>,
    pub end: Option<Date>,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// A persisted reservation as listed by the rental API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub vehicle_id: EntityId,
    pub start_date: Date,
    pub end_date: Date,
}

/// Date block of the create-booking payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDates {
    pub start_date: Date,
    pub end_date: Date,
}

/// Body of `POST /api/booking`.
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace",
///   "dates": { "startDate": "2024-06-01", "endDate": "2024-06-05" },
///   "model": "m1" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingPayload {
    pub first_name: String,
    pub last_name: String,
    pub dates: BookingDates,
    pub model: EntityId,
}

impl BookingPayload {
    /// Assemble the payload from collected wizard answers.
    ///
    /// Requires both dates and a chosen model. Names are sent trimmed.
    pub fn build(
        name: &RenterName,
        model: Option<&EntityId>,
        dates: &DateRange,
    ) -> Result<Self, CoreError> {
        let (Some(start_date), Some(end_date)) = (dates.start, dates.end) else {
            return Err(CoreError::Validation(
                "Please select both start and end dates.".to_string(),
            ));
        };
        let model = model.ok_or_else(|| {
            CoreError::Validation("Please select a vehicle model.".to_string())
        })?;

        Ok(Self {
            first_name: name.first.trim().to_string(),
            last_name: name.last.trim().to_string(),
            dates: BookingDates {
                start_date,
                end_date,
            },
            model: model.clone(),
        })
    }
}

/// Successful create-booking response. The API normally includes a
/// confirmation message, but an empty body is tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReceipt {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day(s: &str) -> Date {
        s.parse().unwrap()
    }

    #[test]
    fn renter_name_requires_both_parts_after_trim() {
        assert!(RenterName::new("Ada", "Lovelace").is_complete());
        assert!(!RenterName::new("Ada", "   ").is_complete());
        assert!(!RenterName::new("", "Lovelace").is_complete());
        assert!(!RenterName::default().is_complete());
    }

    #[test]
    fn payload_serializes_to_wire_shape() {
        let payload = BookingPayload::build(
            &RenterName::new(" Ada ", "Lovelace"),
            Some(&EntityId::from("m1")),
            &DateRange::new(day("2024-06-01"), day("2024-06-05")),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "dates": { "startDate": "2024-06-01", "endDate": "2024-06-05" },
                "model": "m1",
            })
        );
    }

    #[test]
    fn payload_requires_both_dates() {
        let half = DateRange {
            start: Some(day("2024-06-01")),
            end: None,
        };
        let err = BookingPayload::build(
            &RenterName::new("Ada", "Lovelace"),
            Some(&EntityId::from("m1")),
            &half,
        )
        .unwrap_err();
        assert_eq!(err.message(), "Please select both start and end dates.");
    }

    #[test]
    fn payload_requires_model() {
        let err = BookingPayload::build(
            &RenterName::new("Ada", "Lovelace"),
            None,
            &DateRange::new(day("2024-06-01"), day("2024-06-05")),
        )
        .unwrap_err();
        assert_eq!(err.message(), "Please select a vehicle model.");
    }

    #[test]
    fn booking_reads_numeric_ids() {
        let booking: Booking = serde_json::from_value(json!({
            "id": 1,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "vehicleId": 3,
            "startDate": "2024-06-01",
            "endDate": "2024-06-05",
        }))
        .unwrap();
        assert_eq!(booking.vehicle_id.as_str(), "3");
        assert_eq!(booking.end_date, day("2024-06-05"));
    }
}
