//! Import reconciler: maps loosely keyed rows onto series and volumes, one
//! row at a time, collecting per-row failures instead of stopping.

use tbn_core::entities::Volume;
use tbn_core::enums::EditionType;
use tbn_core::import::{ImportRow, MappedRow};
use tbn_core::isbn::clean_optional_isbn;
use tbn_core::responses::ImportOutcome;

use crate::error::DatabaseError;
use crate::repos::volume::VolumeInsert;
use crate::service::LibraryService;

impl LibraryService {
    /// Import `rows` for `owner_id` in input order.
    ///
    /// Rows never enrich their series and always start `unread`, whatever
    /// status-like column they carry. A failing row is recorded in the
    /// outcome and the next row is processed; this method itself does not fail.
    pub async fn import_rows(&self, owner_id: &str, rows: &[ImportRow]) -> ImportOutcome {
        let mut outcome = ImportOutcome::default();

        for row in rows {
            let mapped = row.map_fields();
            let Some((title, volume_number)) = mapped.required_fields() else {
                tracing::debug!(row = %row.describe(), "import row missing title or volume");
                outcome.record_failure(format!(
                    "Missing title or volume for row: {}",
                    row.describe()
                ));
                continue;
            };

            match self.import_row(owner_id, title, volume_number, &mapped).await {
                Ok(volume) => {
                    tracing::debug!(title = %title, volume_id = %volume.id, "imported row");
                    outcome.record_success();
                }
                Err(e) => {
                    tracing::debug!(title = %title, error = %e, "import row failed");
                    outcome.record_failure(format!("Error importing {title}: {e}"));
                }
            }
        }

        tracing::info!(
            owner_id,
            total = outcome.total,
            succeeded = outcome.success_count,
            failed = outcome.failure_count,
            "import finished"
        );
        outcome
    }

    async fn import_row(
        &self,
        owner_id: &str,
        title: &str,
        volume_number: &str,
        mapped: &MappedRow,
    ) -> Result<Volume, DatabaseError> {
        let edition: EditionType = mapped.edition.parse()?;

        let series_id = self
            .resolve_series(owner_id, title, mapped.author.as_deref(), false)
            .await?;
        self.insert_volume(
            owner_id,
            VolumeInsert {
                series_id: &series_id,
                volume_number,
                edition,
                language: &mapped.language,
                isbn: clean_optional_isbn(mapped.isbn.as_deref()),
            },
        )
        .await
    }
}
