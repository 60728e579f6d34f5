//! Schema migrations, embedded at compile time and applied on every open.
//!
//! Each file is idempotent (`IF NOT EXISTS` throughout), so re-applying the
//! whole list against an existing library is a no-op.

use crate::TbnDb;
use crate::error::DatabaseError;

/// Ordered `(name, sql)` pairs.
const MIGRATIONS: &[(&str, &str)] = &[(
    "001_initial",
    include_str!("../migrations/001_initial.sql"),
)];

impl TbnDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        let conn = self.conn().await;
        for (name, sql) in MIGRATIONS {
            conn.execute_batch(sql)
                .await
                .map_err(|e| DatabaseError::Migration(format!("{name}: {e}")))?;
            tracing::debug!(migration = %name, "applied migration");
        }
        Ok(())
    }
}
