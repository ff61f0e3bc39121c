//! HTTP adapter connecting the reservation wizard to the rental REST API.

pub mod api;
pub mod config;

pub use api::RentalApi;
pub use config::ClientConfig;
