//! Volume repository: add (with series resolution and best-effort collection
//! attach), read, status update and delete, all scoped to an owner.

use tbn_core::entities::{Volume, VolumeWithSeries};
use tbn_core::enums::{EditionType, ReadingStatus};
use tbn_core::ids::PREFIX_VOLUME;
use tbn_core::import::DEFAULT_LANGUAGE;
use tbn_core::isbn::{clean_isbn, clean_optional_isbn};
use tbn_core::responses::AddedVolume;
use tbn_metadata::{IsbnMetadata, TitleMetadata};

use crate::error::DatabaseError;
use crate::generate_id;
use crate::helpers::{format_timestamp, get_opt_string, now_micros, parse_datetime, parse_enum};
use crate::repos::series::{SERIES_COLS, row_to_series};
use crate::service::LibraryService;

pub(crate) const VOLUME_COLS: &str = "v.id, v.owner_id, v.series_id, v.volume_number, v.edition_type, v.language, v.isbn, v.status, v.created_at";

/// Number of columns in [`VOLUME_COLS`].
pub(crate) const VOLUME_COL_COUNT: i32 = 9;

/// `SELECT` prefix for a volume joined with its series.
pub(crate) fn volume_with_series_select() -> String {
    format!("SELECT {VOLUME_COLS}, {SERIES_COLS} FROM volumes v JOIN series s ON s.id = v.series_id")
}

pub(crate) fn row_to_volume(row: &libsql::Row, offset: i32) -> Result<Volume, DatabaseError> {
    Ok(Volume {
        id: row.get(offset)?,
        owner_id: row.get(offset + 1)?,
        series_id: row.get(offset + 2)?,
        volume_number: row.get(offset + 3)?,
        edition_type: parse_enum(&row.get::<String>(offset + 4)?)?,
        language: row.get(offset + 5)?,
        isbn: get_opt_string(row, offset + 6)?,
        status: parse_enum(&row.get::<String>(offset + 7)?)?,
        created_at: parse_datetime(&row.get::<String>(offset + 8)?)?,
    })
}

/// Read a row produced by [`volume_with_series_select`].
pub(crate) fn row_to_volume_with_series(
    row: &libsql::Row,
) -> Result<VolumeWithSeries, DatabaseError> {
    Ok(VolumeWithSeries {
        volume: row_to_volume(row, 0)?,
        series: row_to_series(row, VOLUME_COL_COUNT)?,
    })
}

/// Where a newly added volume should be filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionTarget {
    /// An existing collection id.
    Existing(String),
    /// Create a collection with this name.
    New(String),
}

impl CollectionTarget {
    /// Build a target from the two optional inputs; an existing id wins over
    /// a new name, and blank inputs are ignored.
    #[must_use]
    pub fn from_parts(existing: Option<&str>, new_name: Option<&str>) -> Option<Self> {
        let existing = existing.map(str::trim).filter(|s| !s.is_empty());
        let new_name = new_name.map(str::trim).filter(|s| !s.is_empty());
        match (existing, new_name) {
            (Some(id), _) => Some(Self::Existing(id.to_string())),
            (None, Some(name)) => Some(Self::New(name.to_string())),
            (None, None) => None,
        }
    }
}

/// Input for [`LibraryService::add_volume`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVolume {
    pub title: String,
    pub author: Option<String>,
    pub volume_number: String,
    pub edition: EditionType,
    pub language: String,
    pub isbn: Option<String>,
    pub collection: Option<CollectionTarget>,
}

impl NewVolume {
    /// A standard-edition, English volume with no optional fields.
    #[must_use]
    pub fn new(title: impl Into<String>, volume_number: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: None,
            volume_number: volume_number.into(),
            edition: EditionType::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            isbn: None,
            collection: None,
        }
    }

    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    #[must_use]
    pub const fn with_edition(mut self, edition: EditionType) -> Self {
        self.edition = edition;
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    #[must_use]
    pub fn with_isbn(mut self, isbn: impl Into<String>) -> Self {
        self.isbn = Some(isbn.into());
        self
    }

    #[must_use]
    pub fn with_collection(mut self, target: CollectionTarget) -> Self {
        self.collection = Some(target);
        self
    }
}

/// Column values for a volume row, after validation.
pub(crate) struct VolumeInsert<'a> {
    pub series_id: &'a str,
    pub volume_number: &'a str,
    pub edition: EditionType,
    pub language: &'a str,
    pub isbn: Option<String>,
}

impl LibraryService {
    /// Add a volume for `owner_id`.
    ///
    /// Resolves (and, for a new title, enriches) the series, inserts the
    /// volume, then files it into the requested collection. The collection
    /// step is best-effort: its failure is logged and leaves
    /// `collection_id` empty, but the volume stays created.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` when the title or volume number is blank;
    /// a persistence error if the series or volume cannot be written.
    pub async fn add_volume(
        &self,
        owner_id: &str,
        input: &NewVolume,
    ) -> Result<AddedVolume, DatabaseError> {
        let title = input.title.trim();
        let volume_number = input.volume_number.trim();
        if title.is_empty() || volume_number.is_empty() {
            return Err(DatabaseError::Validation(
                "title and volume number are required".into(),
            ));
        }

        let series_id = self
            .resolve_series(owner_id, title, input.author.as_deref(), true)
            .await?;
        let language = match input.language.trim() {
            "" => DEFAULT_LANGUAGE,
            lang => lang,
        };
        let volume = self
            .insert_volume(
                owner_id,
                VolumeInsert {
                    series_id: &series_id,
                    volume_number,
                    edition: input.edition,
                    language,
                    isbn: clean_optional_isbn(input.isbn.as_deref()),
                },
            )
            .await?;

        let collection_id = match &input.collection {
            Some(target) => self.file_volume(owner_id, &volume.id, target).await,
            None => None,
        };

        Ok(AddedVolume {
            volume,
            collection_id,
        })
    }

    /// Insert one `unread` volume row.
    pub(crate) async fn insert_volume(
        &self,
        owner_id: &str,
        fields: VolumeInsert<'_>,
    ) -> Result<Volume, DatabaseError> {
        let conn = self.db().conn().await;
        let id = generate_id(&conn, PREFIX_VOLUME).await?;
        let now = now_micros();
        let status = ReadingStatus::Unread;

        conn.execute(
            "INSERT INTO volumes (id, owner_id, series_id, volume_number, edition_type, language, isbn, status, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            libsql::params![
                id.as_str(),
                owner_id,
                fields.series_id,
                fields.volume_number,
                fields.edition.as_str(),
                fields.language,
                fields.isbn.as_deref(),
                status.as_str(),
                format_timestamp(now)
            ],
        )
        .await?;
        drop(conn);

        tracing::info!(owner_id, volume_id = %id, series_id = fields.series_id, "created volume");
        Ok(Volume {
            id,
            owner_id: owner_id.to_string(),
            series_id: fields.series_id.to_string(),
            volume_number: fields.volume_number.to_string(),
            edition_type: fields.edition,
            language: fields.language.to_string(),
            isbn: fields.isbn,
            status,
            created_at: now,
        })
    }

    /// Attach a fresh volume to its target collection; `None` on any failure.
    async fn file_volume(
        &self,
        owner_id: &str,
        volume_id: &str,
        target: &CollectionTarget,
    ) -> Option<String> {
        let collection_id = match target {
            CollectionTarget::Existing(id) => id.clone(),
            CollectionTarget::New(name) => match self.create_collection(owner_id, name).await {
                Ok(collection) => collection.id,
                Err(e) => {
                    tracing::warn!(volume_id, error = %e, "could not create collection for new volume");
                    return None;
                }
            },
        };

        match self
            .attach(owner_id, &collection_id, &[volume_id.to_string()])
            .await
        {
            Ok(_) => Some(collection_id),
            Err(e) => {
                tracing::warn!(volume_id, %collection_id, error = %e, "could not attach new volume to collection");
                None
            }
        }
    }

    /// Fetch one of the owner's volumes with its series.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the id is absent or owned by someone else.
    pub async fn get_volume(
        &self,
        owner_id: &str,
        id: &str,
    ) -> Result<VolumeWithSeries, DatabaseError> {
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(
                &format!(
                    "{} WHERE v.owner_id = ?1 AND v.id = ?2",
                    volume_with_series_select()
                ),
                libsql::params![owner_id, id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("volume", id))?;
        row_to_volume_with_series(&row)
    }

    /// The owner's volumes joined with their series, newest first.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the query fails.
    pub async fn list_for_owner(
        &self,
        owner_id: &str,
    ) -> Result<Vec<VolumeWithSeries>, DatabaseError> {
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(
                &format!(
                    "{} WHERE v.owner_id = ?1 ORDER BY v.created_at DESC, v.rowid DESC",
                    volume_with_series_select()
                ),
                [owner_id],
            )
            .await?;

        let mut volumes = Vec::new();
        while let Some(row) = rows.next().await? {
            volumes.push(row_to_volume_with_series(&row)?);
        }
        Ok(volumes)
    }

    /// Set the reading status of one of the owner's volumes.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the id is absent or owned by someone else.
    pub async fn update_status(
        &self,
        owner_id: &str,
        id: &str,
        status: ReadingStatus,
    ) -> Result<(), DatabaseError> {
        let updated = self
            .db()
            .conn()
            .await
            .execute(
                "UPDATE volumes SET status = ?1 WHERE owner_id = ?2 AND id = ?3",
                libsql::params![status.as_str(), owner_id, id],
            )
            .await?;
        if updated == 0 {
            return Err(DatabaseError::not_found("volume", id));
        }
        tracing::debug!(owner_id, volume_id = id, status = %status, "volume status updated");
        Ok(())
    }

    /// Delete one of the owner's volumes. Memberships go with it; the series
    /// stays. Returns `false` when there was nothing to delete.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the delete fails.
    pub async fn delete_volume(&self, owner_id: &str, id: &str) -> Result<bool, DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .await
            .execute(
                "DELETE FROM volumes WHERE owner_id = ?1 AND id = ?2",
                libsql::params![owner_id, id],
            )
            .await?;
        if deleted == 0 {
            tracing::debug!(owner_id, volume_id = id, "delete of absent volume");
        }
        Ok(deleted > 0)
    }

    /// Prefill data for a typed or scanned ISBN.
    ///
    /// The raw string is cleaned to digits and `X`. A blank code, disabled
    /// lookups, a catalog miss and a catalog failure all yield `None`.
    pub async fn lookup_isbn(&self, raw: &str) -> Option<IsbnMetadata> {
        let isbn = clean_isbn(raw);
        if isbn.is_empty() {
            return None;
        }
        let lookup = self.metadata()?;
        match lookup.lookup_isbn(&isbn).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(%isbn, error = %e, "isbn lookup unavailable");
                None
            }
        }
    }

    /// Catalog match for a free-text title, with the same failure policy as
    /// [`Self::lookup_isbn`].
    pub async fn lookup_title(&self, title: &str) -> Option<TitleMetadata> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        let lookup = self.metadata()?;
        match lookup.lookup_title(title).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(title, error = %e, "title lookup unavailable");
                None
            }
        }
    }
}
