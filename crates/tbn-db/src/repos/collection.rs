//! Collection membership manager: collections and the many-to-many
//! `collection_volumes` junction.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use tbn_core::entities::{
    Collection, CollectionDetails, CollectionMembership, CollectionSummary, VolumeListing,
};
use tbn_core::ids::PREFIX_COLLECTION;

use crate::commit_or_rollback;
use crate::error::DatabaseError;
use crate::generate_id;
use crate::helpers::{
    format_timestamp, get_count, get_opt_string, now_micros, owner_and_ids, parse_datetime,
    placeholders,
};
use crate::repos::series::{SERIES_COL_COUNT, SERIES_COLS};
use crate::repos::volume::{
    VOLUME_COL_COUNT, VOLUME_COLS, row_to_volume_with_series, volume_with_series_select,
};
use crate::service::LibraryService;

const SELECT_COLS: &str = "c.id, c.owner_id, c.name, c.created_at";

fn row_to_collection(row: &libsql::Row) -> Result<Collection, DatabaseError> {
    Ok(Collection {
        id: row.get(0)?,
        owner_id: row.get(1)?,
        name: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

/// Drop repeated ids, keeping first-seen order.
fn dedup_ids(ids: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| seen.insert(id.as_str()))
        .cloned()
        .collect()
}

fn validate_name(name: &str) -> Result<&str, DatabaseError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DatabaseError::Validation(
            "collection name must not be empty".into(),
        ));
    }
    Ok(name)
}

async fn fetch_collection(
    conn: &libsql::Connection,
    owner_id: &str,
    id: &str,
) -> Result<Collection, DatabaseError> {
    let mut rows = conn
        .query(
            &format!("SELECT {SELECT_COLS} FROM collections c WHERE c.owner_id = ?1 AND c.id = ?2"),
            libsql::params![owner_id, id],
        )
        .await?;
    let row = rows
        .next()
        .await?
        .ok_or_else(|| DatabaseError::not_found("collection", id))?;
    row_to_collection(&row)
}

async fn insert_collection(
    conn: &libsql::Connection,
    id: String,
    owner_id: &str,
    name: &str,
    now: DateTime<Utc>,
) -> Result<Collection, DatabaseError> {
    conn.execute(
        "INSERT INTO collections (id, owner_id, name, created_at) VALUES (?1, ?2, ?3, ?4)",
        libsql::params![id.as_str(), owner_id, name, format_timestamp(now)],
    )
    .await?;
    Ok(Collection {
        id,
        owner_id: owner_id.to_string(),
        name: name.to_string(),
        created_at: now,
    })
}

/// Fail with `NotFound` for the first id that is absent or not the owner's.
async fn ensure_volumes_owned(
    conn: &libsql::Connection,
    owner_id: &str,
    volume_ids: &[String],
) -> Result<(), DatabaseError> {
    if volume_ids.is_empty() {
        return Ok(());
    }
    let sql = format!(
        "SELECT id FROM volumes WHERE owner_id = ?1 AND id IN ({})",
        placeholders(2, volume_ids.len())
    );
    let mut rows = conn
        .query(&sql, libsql::params_from_iter(owner_and_ids(owner_id, volume_ids)))
        .await?;
    let mut owned = HashSet::new();
    while let Some(row) = rows.next().await? {
        owned.insert(row.get::<String>(0)?);
    }
    match volume_ids.iter().find(|id| !owned.contains(*id)) {
        Some(missing) => Err(DatabaseError::not_found("volume", missing)),
        None => Ok(()),
    }
}

/// Insert junction rows, skipping pairs that already exist. Returns the
/// number of new rows.
async fn insert_memberships(
    conn: &libsql::Connection,
    collection_id: &str,
    volume_ids: &[String],
    now: DateTime<Utc>,
) -> Result<u64, DatabaseError> {
    let created_at = format_timestamp(now);
    let mut inserted = 0;
    for volume_id in volume_ids {
        inserted += conn
            .execute(
                "INSERT INTO collection_volumes (collection_id, volume_id, created_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(collection_id, volume_id) DO NOTHING",
                libsql::params![collection_id, volume_id.as_str(), created_at.as_str()],
            )
            .await?;
    }
    Ok(inserted)
}

impl LibraryService {
    /// Create an empty collection. Names need not be unique.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for a blank name; a persistence error if
    /// the row cannot be written.
    pub async fn create_collection(
        &self,
        owner_id: &str,
        name: &str,
    ) -> Result<Collection, DatabaseError> {
        let name = validate_name(name)?;
        let conn = self.db().conn().await;
        let id = generate_id(&conn, PREFIX_COLLECTION).await?;
        let collection = insert_collection(&conn, id, owner_id, name, now_micros()).await?;
        tracing::info!(owner_id, collection_id = %collection.id, "created collection");
        Ok(collection)
    }

    /// Create a collection and attach `volume_ids` to it as one transaction.
    ///
    /// If any volume is absent or foreign, nothing is written.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for a blank name, `DatabaseError::NotFound`
    /// for an unknown volume, or a persistence error.
    pub async fn create_collection_with_volumes(
        &self,
        owner_id: &str,
        name: &str,
        volume_ids: &[String],
    ) -> Result<Collection, DatabaseError> {
        let name = validate_name(name)?;
        let volume_ids = dedup_ids(volume_ids);
        let now = now_micros();

        let conn = self.db().conn().await;
        let id = generate_id(&conn, PREFIX_COLLECTION).await?;
        let tx = conn.transaction().await?;
        let result = async {
            let collection = insert_collection(&tx, id, owner_id, name, now).await?;
            ensure_volumes_owned(&tx, owner_id, &volume_ids).await?;
            insert_memberships(&tx, &collection.id, &volume_ids, now).await?;
            Ok::<_, DatabaseError>(collection)
        }
        .await;
        let collection = commit_or_rollback(tx, result).await?;

        tracing::info!(
            owner_id,
            collection_id = %collection.id,
            volumes = volume_ids.len(),
            "created collection with volumes"
        );
        Ok(collection)
    }

    /// Attach volumes to a collection. Pairs already present are left alone.
    /// Returns the number of memberships created.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the collection or any volume is absent or
    /// foreign (nothing is attached in that case), or a persistence error.
    pub async fn attach(
        &self,
        owner_id: &str,
        collection_id: &str,
        volume_ids: &[String],
    ) -> Result<u64, DatabaseError> {
        let volume_ids = dedup_ids(volume_ids);
        let now = now_micros();

        let conn = self.db().conn().await;
        let tx = conn.transaction().await?;
        let result = async {
            fetch_collection(&tx, owner_id, collection_id).await?;
            ensure_volumes_owned(&tx, owner_id, &volume_ids).await?;
            let inserted = insert_memberships(&tx, collection_id, &volume_ids, now).await?;
            Ok::<_, DatabaseError>(inserted)
        }
        .await;
        let inserted = commit_or_rollback(tx, result).await?;

        tracing::debug!(owner_id, collection_id, requested = volume_ids.len(), inserted, "attached volumes");
        Ok(inserted)
    }

    /// Remove volumes from a collection. Returns the number of memberships removed.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the collection is absent or foreign, or a
    /// persistence error.
    pub async fn detach(
        &self,
        owner_id: &str,
        collection_id: &str,
        volume_ids: &[String],
    ) -> Result<u64, DatabaseError> {
        let conn = self.db().conn().await;
        fetch_collection(&conn, owner_id, collection_id).await?;
        if volume_ids.is_empty() {
            return Ok(0);
        }

        let sql = format!(
            "DELETE FROM collection_volumes WHERE collection_id = ?1 AND volume_id IN ({})",
            placeholders(2, volume_ids.len())
        );
        let removed = conn
            .execute(
                &sql,
                libsql::params_from_iter(owner_and_ids(collection_id, volume_ids)),
            )
            .await?;
        tracing::debug!(owner_id, collection_id, removed, "detached volumes");
        Ok(removed)
    }

    /// Fetch one of the owner's collections.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the id is absent or owned by someone else.
    pub async fn get_collection(
        &self,
        owner_id: &str,
        id: &str,
    ) -> Result<Collection, DatabaseError> {
        let conn = self.db().conn().await;
        fetch_collection(&conn, owner_id, id).await
    }

    /// Junction rows of one of the owner's collections, in attach order.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the collection is absent or owned by
    /// someone else.
    pub async fn list_memberships(
        &self,
        owner_id: &str,
        collection_id: &str,
    ) -> Result<Vec<CollectionMembership>, DatabaseError> {
        let conn = self.db().conn().await;
        fetch_collection(&conn, owner_id, collection_id).await?;
        let mut rows = conn
            .query(
                "SELECT collection_id, volume_id, created_at FROM collection_volumes
                 WHERE collection_id = ?1
                 ORDER BY created_at ASC, rowid ASC",
                [collection_id],
            )
            .await?;

        let mut memberships = Vec::new();
        while let Some(row) = rows.next().await? {
            memberships.push(CollectionMembership {
                collection_id: row.get(0)?,
                volume_id: row.get(1)?,
                created_at: parse_datetime(&row.get::<String>(2)?)?,
            });
        }
        Ok(memberships)
    }

    /// A collection with its volumes, in attach order.
    ///
    /// # Errors
    ///
    /// `DatabaseError::NotFound` if the id is absent or owned by someone else.
    pub async fn get_details(
        &self,
        owner_id: &str,
        collection_id: &str,
    ) -> Result<CollectionDetails, DatabaseError> {
        let conn = self.db().conn().await;
        let collection = fetch_collection(&conn, owner_id, collection_id).await?;
        let sql = format!(
            "{} JOIN collection_volumes cv ON cv.volume_id = v.id
             WHERE cv.collection_id = ?1
             ORDER BY cv.created_at ASC, cv.rowid ASC",
            volume_with_series_select()
        );
        let mut rows = conn.query(&sql, [collection_id]).await?;

        let mut volumes = Vec::new();
        while let Some(row) = rows.next().await? {
            volumes.push(row_to_volume_with_series(&row)?);
        }
        Ok(CollectionDetails {
            collection,
            volumes,
        })
    }

    /// The owner's collections, newest first, each with its member count and
    /// the cover of the earliest-attached member whose series has one.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the query fails.
    pub async fn list_with_counts(
        &self,
        owner_id: &str,
    ) -> Result<Vec<CollectionSummary>, DatabaseError> {
        let sql = format!(
            "SELECT {SELECT_COLS},
                (SELECT COUNT(*) FROM collection_volumes cv WHERE cv.collection_id = c.id),
                (SELECT s.cover_url
                   FROM collection_volumes cv
                   JOIN volumes v ON v.id = cv.volume_id
                   JOIN series s ON s.id = v.series_id
                  WHERE cv.collection_id = c.id AND s.cover_url IS NOT NULL AND s.cover_url <> ''
                  ORDER BY cv.created_at ASC, cv.rowid ASC
                  LIMIT 1)
             FROM collections c
             WHERE c.owner_id = ?1
             ORDER BY c.created_at DESC, c.rowid DESC"
        );
        let conn = self.db().conn().await;
        let mut rows = conn.query(&sql, [owner_id]).await?;

        let mut summaries = Vec::new();
        while let Some(row) = rows.next().await? {
            summaries.push(CollectionSummary {
                collection: row_to_collection(&row)?,
                volume_count: get_count(&row, 4)?,
                cover_url: get_opt_string(&row, 5)?,
            });
        }
        Ok(summaries)
    }

    /// Every volume of the owner, newest first, flagged with whether it
    /// belongs to at least one collection.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the query fails.
    pub async fn list_all_with_membership_flag(
        &self,
        owner_id: &str,
    ) -> Result<Vec<VolumeListing>, DatabaseError> {
        let sql = format!(
            "SELECT {VOLUME_COLS}, {SERIES_COLS},
                EXISTS (SELECT 1 FROM collection_volumes cv WHERE cv.volume_id = v.id)
             FROM volumes v JOIN series s ON s.id = v.series_id
             WHERE v.owner_id = ?1
             ORDER BY v.created_at DESC, v.rowid DESC"
        );
        let conn = self.db().conn().await;
        let mut rows = conn.query(&sql, [owner_id]).await?;

        let flag_idx = VOLUME_COL_COUNT + SERIES_COL_COUNT;
        let mut listings = Vec::new();
        while let Some(row) = rows.next().await? {
            listings.push(VolumeListing {
                entry: row_to_volume_with_series(&row)?,
                in_collection: row.get::<i64>(flag_idx)? != 0,
            });
        }
        Ok(listings)
    }
}
