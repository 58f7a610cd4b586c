//! Refill Request Repository
//!
//! The queue table. Rows are inserted `pending` and move to `printed`
//! exactly once; the conditional UPDATE in [`mark_printed`] is what makes
//! repeated acks harmless.

use shared::models::RefillRequest;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

/// Insert a new pending request, returning its id.
///
/// Ids come from SQLite AUTOINCREMENT and are never reused, so an ack for
/// an old id can never hit a newer row.
pub async fn insert(
    pool: &SqlitePool,
    rx_number: &str,
    patient_first_name: Option<&str>,
    store_id: i64,
) -> RepoResult<i64> {
    if rx_number.trim().is_empty() {
        return Err(RepoError::Validation("rx_number must not be empty".into()));
    }
    if store_id <= 0 {
        return Err(RepoError::Validation(format!(
            "store_id must be positive, got {store_id}"
        )));
    }

    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO refill_requests (rx_number, patient_first_name, store_id, status, created_at) \
         VALUES (?1, ?2, ?3, 'pending', ?4) RETURNING id",
    )
    .bind(rx_number.trim())
    .bind(patient_first_name)
    .bind(store_id)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Pending requests for one store, oldest submission first.
///
/// Id breaks ties within the same millisecond, preserving submission order.
pub async fn list_pending(pool: &SqlitePool, store_id: i64) -> RepoResult<Vec<RefillRequest>> {
    let requests = sqlx::query_as::<_, RefillRequest>(
        "SELECT id, rx_number, patient_first_name, store_id, status, created_at, printed_at \
         FROM refill_requests \
         WHERE store_id = ?1 AND status = 'pending' \
         ORDER BY created_at ASC, id ASC",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;

    Ok(requests)
}

/// Transition a pending request to printed.
///
/// Returns `false` (not an error) when the row is missing or already
/// printed. Only this function sets `printed_at`.
pub async fn mark_printed(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let now = shared::util::now_millis();
    let result = sqlx::query(
        "UPDATE refill_requests SET status = 'printed', printed_at = ?1 \
         WHERE id = ?2 AND status = 'pending'",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Fetch one request by id.
pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Option<RefillRequest>> {
    let request = sqlx::query_as::<_, RefillRequest>(
        "SELECT id, rx_number, patient_first_name, store_id, status, created_at, printed_at \
         FROM refill_requests WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::RequestStatus;

    async fn test_pool() -> (tempfile::TempDir, SqlitePool) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let db = DbService::new(path.to_str().unwrap()).await.unwrap();
        (dir, db.pool)
    }

    #[tokio::test]
    async fn test_insert_returns_distinct_ids() {
        let (_dir, pool) = test_pool().await;

        let a = insert(&pool, "6876386", Some("Maria"), 157).await.unwrap();
        let b = insert(&pool, "2413579", None, 157).await.unwrap();

        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_insert_validates_input() {
        let (_dir, pool) = test_pool().await;

        let err = insert(&pool, "   ", None, 157).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = insert(&pool, "6876386", None, 0).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let err = insert(&pool, "6876386", None, -3).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }

    #[tokio::test]
    async fn test_list_pending_preserves_submission_order() {
        let (_dir, pool) = test_pool().await;

        let a = insert(&pool, "6876386", None, 157).await.unwrap();
        let b = insert(&pool, "2413579", None, 157).await.unwrap();
        let c = insert(&pool, "8550012", None, 157).await.unwrap();

        let pending = list_pending(&pool, 157).await.unwrap();
        let ids: Vec<i64> = pending.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a, b, c]);
    }

    #[tokio::test]
    async fn test_list_pending_is_scoped_to_store() {
        let (_dir, pool) = test_pool().await;

        insert(&pool, "6876386", None, 157).await.unwrap();
        insert(&pool, "2413579", None, 201).await.unwrap();

        let pending = list_pending(&pool, 157).await.unwrap();
        assert_eq!(pending.len(), 1);
        assert!(pending.iter().all(|r| r.store_id == 157));

        let pending = list_pending(&pool, 999).await.unwrap();
        assert!(pending.is_empty());
    }

    #[tokio::test]
    async fn test_mark_printed_is_idempotent() {
        let (_dir, pool) = test_pool().await;

        let id = insert(&pool, "6876386", None, 157).await.unwrap();

        assert!(mark_printed(&pool, id).await.unwrap());
        assert!(!mark_printed(&pool, id).await.unwrap());

        let row = get(&pool, id).await.unwrap().unwrap();
        assert_eq!(row.status, RequestStatus::Printed);
        assert!(row.printed_at.is_some());
    }

    #[tokio::test]
    async fn test_mark_printed_unknown_id_reports_no_change() {
        let (_dir, pool) = test_pool().await;

        assert!(!mark_printed(&pool, 99_999).await.unwrap());
    }

    #[tokio::test]
    async fn test_printed_rows_leave_the_pending_queue() {
        let (_dir, pool) = test_pool().await;

        let a = insert(&pool, "6876386", None, 157).await.unwrap();
        let b = insert(&pool, "2413579", None, 157).await.unwrap();

        mark_printed(&pool, a).await.unwrap();

        let pending = list_pending(&pool, 157).await.unwrap();
        let ids: Vec<i64> = pending.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![b]);

        let row = get(&pool, a).await.unwrap().unwrap();
        assert!(!row.is_pending());
        assert!(row.printed_at.is_some());
    }
}
