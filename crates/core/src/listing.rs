//! Read-only listing of persisted bookings.

use serde::Serialize;

use crate::booking::Booking;
use crate::collaborator::RentalCollaborator;

/// Shown when the bookings could not be loaded.
pub const LISTING_FAILURE: &str = "Error fetching bookings. Please try again later.";

/// Bookings in the order the API returned them, or an error to display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookingListing {
    pub bookings: Vec<Booking>,
    pub error: Option<String>,
}

impl BookingListing {
    /// Load every booking. Failures produce an empty listing with a
    /// display-level error rather than an `Err`.
    pub async fn list_all<C: RentalCollaborator>(api: &C) -> Self {
        match api.bookings().await {
            Ok(bookings) => Self {
                bookings,
                error: None,
            },
            Err(err) => {
                tracing::error!(error = %err, "Error fetching bookings");
                Self {
                    bookings: Vec::new(),
                    error: Some(LISTING_FAILURE.to_string()),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::CollaboratorError;
    use crate::testing::FakeApi;
    use crate::types::EntityId;

    fn booking(id: i64, first: &str) -> Booking {
        Booking {
            id: EntityId::from(id),
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            vehicle_id: EntityId::from(3),
            start_date: "2024-06-01".parse().unwrap(),
            end_date: "2024-06-05".parse().unwrap(),
        }
    }

    #[tokio::test]
    async fn keeps_api_order() {
        let api = FakeApi::default().with_listing(Ok(vec![booking(2, "Bo"), booking(1, "Al")]));
        let listing = BookingListing::list_all(&api).await;

        assert_eq!(listing.error, None);
        let names: Vec<_> = listing.bookings.iter().map(|b| b.first_name.as_str()).collect();
        assert_eq!(names, ["Bo", "Al"]);
    }

    #[tokio::test]
    async fn failure_yields_empty_listing_with_error() {
        let api = FakeApi::default().with_listing(Err(CollaboratorError::Rejected {
            status: 500,
            message: None,
        }));
        let listing = BookingListing::list_all(&api).await;

        assert!(listing.bookings.is_empty());
        assert_eq!(listing.error.as_deref(), Some(LISTING_FAILURE));
    }
}
