/// Domain-level error shared by all FitTogether crates.
///
/// `NotFound` carries the lookup key as a string because entities are
/// addressed both by numeric id and by external UUID.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a `NotFound` on a numeric id.
    pub fn not_found(entity: &'static str, id: crate::types::DbId) -> Self {
        CoreError::NotFound {
            entity,
            key: id.to_string(),
        }
    }

    /// Shorthand for a `NotFound` on an external UUID.
    pub fn not_found_uuid(entity: &'static str, uuid: uuid::Uuid) -> Self {
        CoreError::NotFound {
            entity,
            key: uuid.to_string(),
        }
    }
}
