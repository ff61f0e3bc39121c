//! Vehicle catalog types: wheel counts, vehicle types, and models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Wheel count
// ---------------------------------------------------------------------------

/// Number of wheels a rentable vehicle has. Only two- and four-wheelers
/// are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WheelCount {
    Two,
    Four,
}

impl WheelCount {
    /// All selectable wheel counts, in display order.
    pub const ALL: [WheelCount; 2] = [WheelCount::Two, WheelCount::Four];

    pub fn as_u8(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Four => 4,
        }
    }

    pub fn from_u8(n: u8) -> Result<Self, CoreError> {
        match n {
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            _ => Err(CoreError::Validation(format!(
                "Invalid number of wheels {n}. Must be 2 or 4"
            ))),
        }
    }
}

impl TryFrom<u8> for WheelCount {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::from_u8(n)
    }
}

impl From<WheelCount> for u8 {
    fn from(w: WheelCount) -> Self {
        w.as_u8()
    }
}

impl FromStr for WheelCount {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s.trim().parse().map_err(|_| {
            CoreError::Validation(format!("Invalid number of wheels '{s}'. Must be 2 or 4"))
        })?;
        Self::from_u8(n)
    }
}

impl fmt::Display for WheelCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// A vehicle category (e.g. "SUV") offered for a given wheel count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleType {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wheels: Option<WheelCount>,
}

/// A concrete rentable model (e.g. "RAV4") belonging to a vehicle type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleModel {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type_id: Option<EntityId>,
}
