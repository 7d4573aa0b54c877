//! Common error types used across the workspace.
//!
//! Each layer defines its own typed error and converts into [`HavenError`]
//! at the port boundary. The two collaborator variants box the adapter
//! error so the domain stays free of IO crate types.

/// Top-level error for all haven operations.
#[derive(Debug, thiserror::Error)]
pub enum HavenError {
    /// A domain invariant was violated.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The state store failed to complete a call.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The image classifier failed to complete a call.
    #[error("classifier error")]
    Classifier(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A sensor was created with an empty name.
    #[error("sensor name must not be empty")]
    EmptyName,
}

/// A lookup by identifier found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// The kind of record looked up (e.g. `"Sensor"`).
    pub entity: &'static str,
    /// The identifier that missed.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_validation_error_into_haven_error() {
        let err: HavenError = ValidationError::EmptyName.into();
        assert!(matches!(err, HavenError::Validation(_)));
    }

    #[test]
    fn should_format_not_found_with_entity_and_id() {
        let err = NotFoundError {
            entity: "Sensor",
            id: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Sensor not found: abc");
    }
}
