use crate::types::EntityId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The human-readable part of the error, without the category prefix.
    ///
    /// This is what the wizard stores in its `error` slot and what the
    /// server puts in the `message` field of an error response.
    pub fn message(&self) -> String {
        match self {
            Self::NotFound { entity, id } => format!("{entity} with id {id} not found"),
            Self::Validation(msg) | Self::Conflict(msg) | Self::Internal(msg) => msg.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_category() {
        let err = CoreError::Validation("Please select a date range.".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Please select a date range."
        );
    }

    #[test]
    fn message_strips_category() {
        let err = CoreError::Validation("Please select a date range.".into());
        assert_eq!(err.message(), "Please select a date range.");

        let err = CoreError::NotFound {
            entity: "Vehicle",
            id: EntityId::from("7"),
        };
        assert_eq!(err.message(), "Vehicle with id 7 not found");
    }
}
