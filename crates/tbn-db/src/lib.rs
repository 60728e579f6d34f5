//! # tbn-db
//!
//! libSQL storage and the reconciliation engine for the Tankobon library.
//!
//! Holds all relational state (series, volumes, collections and the
//! `collection_volumes` junction) and implements, as `impl LibraryService`
//! blocks under [`repos`]:
//! - the series resolver (create-or-fetch by case-insensitive title)
//! - the volume repository
//! - the collection membership manager
//! - the bulk operation coordinator
//! - the import reconciler
//!
//! Every operation takes the caller's `owner_id` explicitly.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use tokio::sync::{Mutex, MutexGuard};

/// Central database handle.
///
/// Wraps a libSQL database and its single connection. The connection sits
/// behind an async mutex: every operation holds the guard from its first
/// statement to its last, so one operation's statements never run inside
/// another operation's transaction.
pub struct TbnDb {
    _db: libsql::Database,
    conn: Mutex<libsql::Connection>,
}

impl TbnDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Runs migrations automatically on every open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Must be set per connection in SQLite; the junction cascades rely on it.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let tbn_db = Self {
            _db: db,
            conn: Mutex::new(conn),
        };
        tbn_db.run_migrations().await?;
        tracing::debug!(path, "library database opened");
        Ok(tbn_db)
    }

    /// Exclusive access to the connection until the guard is dropped.
    ///
    /// Not re-entrant: code holding the guard must pass `&Connection` down
    /// rather than lock again.
    pub async fn conn(&self) -> MutexGuard<'_, libsql::Connection> {
        self.conn.lock().await
    }

    /// Generate a prefixed ID. Returns e.g. `"vol-a3f8b2c1d4e5f607"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let conn = self.conn().await;
        generate_id(&conn, prefix).await
    }
}

/// Generate `"{prefix}-{16 hex chars}"` from 64 random bits on `conn`.
pub(crate) async fn generate_id(
    conn: &libsql::Connection,
    prefix: &str,
) -> Result<String, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT '{prefix}-' || lower(hex(randomblob(8)))"),
            (),
        )
        .await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<String>(0)?)
}

/// Commit `tx` when `result` is `Ok`, roll it back otherwise.
pub(crate) async fn commit_or_rollback<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(e) => {
            if let Err(rollback) = tx.rollback().await {
                tracing::warn!(error = %rollback, "transaction rollback failed");
            }
            Err(e)
        }
    }
}
