//! Series resolver: create-or-fetch by case-insensitive title, with optional
//! enrichment of newly created series.

use tbn_core::entities::Series;
use tbn_core::ids::PREFIX_SERIES;
use tbn_metadata::TitleMetadata;

use crate::error::DatabaseError;
use crate::generate_id;
use crate::helpers::{format_timestamp, get_opt_string, now_micros, parse_datetime};
use crate::service::LibraryService;

pub(crate) const SERIES_COLS: &str =
    "s.id, s.owner_id, s.title, s.author, s.description, s.cover_url, s.external_catalog_id, s.created_at";

/// Number of columns in [`SERIES_COLS`].
pub(crate) const SERIES_COL_COUNT: i32 = 8;

/// Read a series whose columns start at `offset`.
pub(crate) fn row_to_series(row: &libsql::Row, offset: i32) -> Result<Series, DatabaseError> {
    Ok(Series {
        id: row.get(offset)?,
        owner_id: row.get(offset + 1)?,
        title: row.get(offset + 2)?,
        author: get_opt_string(row, offset + 3)?,
        description: get_opt_string(row, offset + 4)?,
        cover_url: get_opt_string(row, offset + 5)?,
        external_catalog_id: get_opt_string(row, offset + 6)?,
        created_at: parse_datetime(&row.get::<String>(offset + 7)?)?,
    })
}

/// Enrichment fields copied onto a new series.
#[derive(Debug, Default)]
struct Enrichment {
    description: Option<String>,
    cover_url: Option<String>,
    external_catalog_id: Option<String>,
}

impl From<TitleMetadata> for Enrichment {
    fn from(meta: TitleMetadata) -> Self {
        Self {
            cover_url: meta.cover_image.best().map(String::from),
            description: meta.description.filter(|d| !d.trim().is_empty()),
            external_catalog_id: Some(meta.external_id.to_string()),
        }
    }
}

async fn find_series_id(
    conn: &libsql::Connection,
    owner_id: &str,
    title_key: &str,
) -> Result<Option<String>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id FROM series WHERE owner_id = ?1 AND title_key = ?2",
            libsql::params![owner_id, title_key],
        )
        .await?;
    match rows.next().await? {
        Some(row) => Ok(Some(row.get::<String>(0)?)),
        None => Ok(None),
    }
}

impl LibraryService {
    /// Return the id of the owner's series titled `title` (case-insensitive),
    /// creating it when absent.
    ///
    /// `author_hint` is only used on creation; an existing series is never
    /// mutated. With `enrich`, a new series is first looked up by title in
    /// the metadata catalog; a miss or a catalog failure yields a bare series.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for a blank title; a persistence error if
    /// the series cannot be read or written.
    pub async fn resolve_series(
        &self,
        owner_id: &str,
        title: &str,
        author_hint: Option<&str>,
        enrich: bool,
    ) -> Result<String, DatabaseError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DatabaseError::Validation("series title must not be empty".into()));
        }
        let key = Series::title_key(title);

        let existing = {
            let conn = self.db().conn().await;
            find_series_id(&conn, owner_id, &key).await?
        };
        if let Some(id) = existing {
            tracing::debug!(owner_id, title, series_id = %id, "series resolved to existing");
            return Ok(id);
        }

        // The catalog call happens without holding the connection.
        let enrichment = if enrich {
            self.enrichment_for(title).await
        } else {
            Enrichment::default()
        };
        let author = author_hint.map(str::trim).filter(|a| !a.is_empty());

        let conn = self.db().conn().await;
        let id = generate_id(&conn, PREFIX_SERIES).await?;
        let inserted = conn
            .execute(
                "INSERT INTO series (id, owner_id, title, title_key, author, description, cover_url, external_catalog_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                 ON CONFLICT(owner_id, title_key) DO NOTHING",
                libsql::params![
                    id.as_str(),
                    owner_id,
                    title,
                    key.as_str(),
                    author,
                    enrichment.description.as_deref(),
                    enrichment.cover_url.as_deref(),
                    enrichment.external_catalog_id.as_deref(),
                    format_timestamp(now_micros())
                ],
            )
            .await?;

        if inserted == 0 {
            // Another resolve created the same title between the lookup and the insert.
            let winner = find_series_id(&conn, owner_id, &key)
                .await?
                .ok_or(DatabaseError::NoResult)?;
            tracing::debug!(owner_id, title, series_id = %winner, "series created concurrently, reusing");
            return Ok(winner);
        }

        tracing::info!(
            owner_id,
            title,
            series_id = %id,
            enriched = enrichment.external_catalog_id.is_some(),
            "created series"
        );
        Ok(id)
    }

    /// Fetch one of the owner's series.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the id is absent or owned by someone else.
    pub async fn get_series(&self, owner_id: &str, id: &str) -> Result<Series, DatabaseError> {
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(
                &format!("SELECT {SERIES_COLS} FROM series s WHERE s.owner_id = ?1 AND s.id = ?2"),
                libsql::params![owner_id, id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("series", id))?;
        row_to_series(&row, 0)
    }

    /// All of the owner's series, alphabetical by case-folded title.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the query fails.
    pub async fn list_series(&self, owner_id: &str) -> Result<Vec<Series>, DatabaseError> {
        let conn = self.db().conn().await;
        let mut rows = conn
            .query(
                &format!(
                    "SELECT {SERIES_COLS} FROM series s WHERE s.owner_id = ?1 ORDER BY s.title_key, s.rowid"
                ),
                [owner_id],
            )
            .await?;

        let mut series = Vec::new();
        while let Some(row) = rows.next().await? {
            series.push(row_to_series(&row, 0)?);
        }
        Ok(series)
    }

    /// Best-effort title lookup. Never fails.
    async fn enrichment_for(&self, title: &str) -> Enrichment {
        let Some(lookup) = self.metadata() else {
            return Enrichment::default();
        };
        match lookup.lookup_title(title).await {
            Ok(Some(meta)) => {
                tracing::debug!(title, external_id = meta.external_id, "series enrichment found");
                meta.into()
            }
            Ok(None) => {
                tracing::debug!(title, "no catalog match for series");
                Enrichment::default()
            }
            Err(e) => {
                tracing::warn!(title, error = %e, "series enrichment unavailable");
                Enrichment::default()
            }
        }
    }
}
