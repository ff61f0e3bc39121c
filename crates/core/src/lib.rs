//! Vehicle rental reservation core.
//!
//! Holds the domain types, the step-by-step reservation wizard with its
//! cascading option lists, booking submission, and the booking listing.
//! Network access goes through the [`collaborator::RentalCollaborator`]
//! trait so the wizard logic stays independent of any HTTP client.

pub mod booking;
pub mod cascade;
pub mod collaborator;
pub mod error;
pub mod listing;
pub mod submit;
pub mod types;
pub mod vehicle;
pub mod view;
pub mod wizard;

#[cfg(test)]
pub(crate) mod testing;
