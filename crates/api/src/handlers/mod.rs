pub mod booking;
pub mod vehicle;
pub mod vehicle_type;
