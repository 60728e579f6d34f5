//! Bulk operation coordinator: one set-based statement per operation, inside
//! a transaction, so a bulk change either lands for every owned id or for none.

use tbn_core::enums::ReadingStatus;

use crate::commit_or_rollback;
use crate::error::DatabaseError;
use crate::helpers::{owner_and_ids, placeholders};
use crate::service::LibraryService;

fn require_ids(ids: &[String]) -> Result<(), DatabaseError> {
    if ids.is_empty() {
        return Err(DatabaseError::Validation(
            "bulk operation needs at least one volume id".into(),
        ));
    }
    Ok(())
}

impl LibraryService {
    /// Delete every listed volume the owner holds. Ids that are absent or
    /// foreign are skipped. Returns the number of volumes deleted.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for an empty id set; otherwise a single
    /// persistence error, with nothing deleted.
    pub async fn bulk_delete(&self, owner_id: &str, ids: &[String]) -> Result<u64, DatabaseError> {
        require_ids(ids)?;
        let sql = format!(
            "DELETE FROM volumes WHERE owner_id = ?1 AND id IN ({})",
            placeholders(2, ids.len())
        );

        let conn = self.db().conn().await;
        let tx = conn.transaction().await?;
        let result = tx
            .execute(&sql, libsql::params_from_iter(owner_and_ids(owner_id, ids)))
            .await
            .map_err(DatabaseError::from);
        let deleted = commit_or_rollback(tx, result).await?;
        drop(conn);

        tracing::info!(owner_id, requested = ids.len(), deleted, "bulk delete");
        Ok(deleted)
    }

    /// Set `status` on every listed volume the owner holds. Returns the
    /// number of volumes updated.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Validation` for an empty id set; otherwise a single
    /// persistence error, with nothing updated.
    pub async fn bulk_set_status(
        &self,
        owner_id: &str,
        ids: &[String],
        status: ReadingStatus,
    ) -> Result<u64, DatabaseError> {
        require_ids(ids)?;
        // ?1 is the status, ?2 the owner, then the ids.
        let sql = format!(
            "UPDATE volumes SET status = ?1 WHERE owner_id = ?2 AND id IN ({})",
            placeholders(3, ids.len())
        );
        let mut params = vec![libsql::Value::from(status.as_str().to_string())];
        params.extend(owner_and_ids(owner_id, ids));

        let conn = self.db().conn().await;
        let tx = conn.transaction().await?;
        let result = tx
            .execute(&sql, libsql::params_from_iter(params))
            .await
            .map_err(DatabaseError::from);
        let updated = commit_or_rollback(tx, result).await?;
        drop(conn);

        tracing::info!(owner_id, requested = ids.len(), updated, status = %status, "bulk status change");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{OTHER_OWNER, OWNER, add_test_volume, add_volume_for, test_service};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn empty_sets_are_rejected() {
        let svc = test_service().await;
        assert!(matches!(
            svc.bulk_delete(OWNER, &[]).await,
            Err(DatabaseError::Validation(_))
        ));
        assert!(matches!(
            svc.bulk_set_status(OWNER, &[], ReadingStatus::Completed).await,
            Err(DatabaseError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn set_status_touches_only_selection() {
        let svc = test_service().await;
        let a = add_test_volume(&svc, "Naruto", "1").await;
        let b = add_test_volume(&svc, "Naruto", "2").await;
        let untouched = add_test_volume(&svc, "Naruto", "3").await;
        svc.update_status(OWNER, &untouched, ReadingStatus::Reading)
            .await
            .unwrap();

        let updated = svc
            .bulk_set_status(OWNER, &[a.clone(), b.clone()], ReadingStatus::Completed)
            .await
            .unwrap();
        assert_eq!(updated, 2);

        for id in [&a, &b] {
            let v = svc.get_volume(OWNER, id).await.unwrap();
            assert_eq!(v.volume.status, ReadingStatus::Completed);
        }
        let v = svc.get_volume(OWNER, &untouched).await.unwrap();
        assert_eq!(v.volume.status, ReadingStatus::Reading);
    }

    #[tokio::test]
    async fn foreign_ids_are_left_alone() {
        let svc = test_service().await;
        let mine = add_test_volume(&svc, "Naruto", "1").await;
        let theirs = add_volume_for(&svc, OTHER_OWNER, "Naruto", "1").await;

        let updated = svc
            .bulk_set_status(OWNER, &[mine, theirs.clone()], ReadingStatus::Collected)
            .await
            .unwrap();
        assert_eq!(updated, 1);
        let v = svc.get_volume(OTHER_OWNER, &theirs).await.unwrap();
        assert_eq!(v.volume.status, ReadingStatus::Unread);

        assert_eq!(svc.bulk_delete(OWNER, &[theirs.clone()]).await.unwrap(), 0);
        assert!(svc.get_volume(OTHER_OWNER, &theirs).await.is_ok());
    }

    #[tokio::test]
    async fn bulk_delete_removes_selection_and_memberships() {
        let svc = test_service().await;
        let a = add_test_volume(&svc, "Naruto", "1").await;
        let b = add_test_volume(&svc, "Naruto", "2").await;
        let keep = add_test_volume(&svc, "Naruto", "3").await;
        let c = svc
            .create_collection_with_volumes(OWNER, "Shelf", &[a.clone(), keep.clone()])
            .await
            .unwrap();

        let deleted = svc
            .bulk_delete(OWNER, &[a, b, "vol-missing0".into()])
            .await
            .unwrap();
        assert_eq!(deleted, 2);

        let remaining = svc.list_for_owner(OWNER).await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].volume.id, keep);
        let details = svc.get_details(OWNER, &c.id).await.unwrap();
        assert_eq!(details.volumes.len(), 1);
    }
}
