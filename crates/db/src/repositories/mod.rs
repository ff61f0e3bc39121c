//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod booking_repo;
pub mod vehicle_repo;
pub mod vehicle_type_repo;

pub use booking_repo::BookingRepo;
pub use vehicle_repo::VehicleRepo;
pub use vehicle_type_repo::VehicleTypeRepo;
