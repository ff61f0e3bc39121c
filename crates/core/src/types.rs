use std::fmt;

use serde::{Deserialize, Serialize};

/// All database primary keys are SQLite INTEGER rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar day used for booking ranges (`YYYY-MM-DD` on the wire).
pub type Date = chrono::NaiveDate;

/// Identifier of a catalog entry or booking as reported by the collaborator.
///
/// The rental API may send ids as JSON strings (`"t1"`) or integers (`3`);
/// both deserialize into the same string-backed value and serialize back as
/// a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawId")]
pub struct EntityId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(i64),
}

impl From<RawId> for EntityId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        }
    }
}

impl EntityId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Interpret the id as a database row id, if it is numeric.
    pub fn as_db_id(&self) -> Option<DbId> {
        self.0.trim().parse().ok()
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntityId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<DbId> for EntityId {
    fn from(id: DbId) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
