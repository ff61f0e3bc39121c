//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the table row; `booking` also holds the `Deserialize` create DTO.

pub mod booking;
pub mod vehicle;
pub mod vehicle_type;
