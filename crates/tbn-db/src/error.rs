//! Database error types for tbn-db.

use tbn_core::errors::CoreError;
use thiserror::Error;

/// Errors from library operations.
///
/// `Validation` and `NotFound` are caller-facing; every other variant is a
/// persistence failure (see [`DatabaseError::is_persistence`]).
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A required field was missing or a value could not be parsed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The target id is absent or not owned by the caller.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    pub(crate) fn not_found(entity: &str, id: &str) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.to_string(),
        }
    }

    /// `true` for storage read/write failures, as opposed to validation
    /// or not-found outcomes.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        !matches!(self, Self::Validation(_) | Self::NotFound { .. })
    }
}

impl From<CoreError> for DatabaseError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => Self::Validation(msg),
            CoreError::NotFound { entity_type, id } => Self::NotFound {
                entity: entity_type,
                id,
            },
            CoreError::Other(e) => Self::Other(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_split() {
        assert!(!DatabaseError::Validation("x".into()).is_persistence());
        assert!(!DatabaseError::not_found("volume", "vol-1").is_persistence());
        assert!(DatabaseError::NoResult.is_persistence());
        assert!(DatabaseError::Query("boom".into()).is_persistence());
    }

    #[test]
    fn core_validation_maps_to_validation() {
        let err: DatabaseError = CoreError::Validation("unknown edition type 'x'".into()).into();
        assert!(matches!(err, DatabaseError::Validation(msg) if msg.contains("edition")));
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = DatabaseError::not_found("collection", "col-00000000");
        assert_eq!(err.to_string(), "collection not found: col-00000000");
    }
}
