//! Service layer tying storage to the optional metadata adapter.
//!
//! `LibraryService` wraps `TbnDb` (raw database access) and an optional
//! [`MetadataLookup`]. All repo methods are implemented as
//! `impl LibraryService` blocks.

use std::sync::Arc;

use tbn_metadata::MetadataLookup;

use crate::TbnDb;
use crate::error::DatabaseError;

pub struct LibraryService {
    db: TbnDb,
    metadata: Option<Arc<dyn MetadataLookup>>,
}

impl LibraryService {
    /// Create a new service over a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `metadata` - External catalog used for enrichment and ISBN prefill.
    ///   Pass `None` to disable all lookups.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        db_path: &str,
        metadata: Option<Arc<dyn MetadataLookup>>,
    ) -> Result<Self, DatabaseError> {
        let db = TbnDb::open_local(db_path).await?;
        Ok(Self { db, metadata })
    }

    /// Create from an existing `TbnDb`.
    #[must_use]
    pub fn from_db(db: TbnDb, metadata: Option<Arc<dyn MetadataLookup>>) -> Self {
        Self { db, metadata }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &TbnDb {
        &self.db
    }

    pub(crate) fn metadata(&self) -> Option<&dyn MetadataLookup> {
        self.metadata.as_deref()
    }

    /// Whether external lookups are enabled.
    #[must_use]
    pub const fn has_metadata(&self) -> bool {
        self.metadata.is_some()
    }
}
