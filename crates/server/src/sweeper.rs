use std::sync::Arc;
use std::time::Duration;

use sqlx::SqlitePool;

use crate::blob::BlobStore;
use crate::AppState;

/// Purge every message older than the retention window, removing the
/// attachment payload (when one exists) before the row itself.
///
/// Stateless and idempotent: the cutoff is recomputed from the wall clock on
/// every run, and deleting an already-deleted row is a no-op, so overlapping
/// runs are safe. A failed payload delete is logged and skipped — an
/// orphaned payload is recoverable, a row pointing at nothing is not, so the
/// row delete always proceeds.
pub async fn sweep_expired(
    db: &SqlitePool,
    blobs: &BlobStore,
    retention: Duration,
) -> Result<u64, sqlx::Error> {
    let cutoff = chrono::Utc::now().timestamp_millis() - retention.as_millis() as i64;

    let expired = sqlx::query_as::<_, (String, Option<String>)>(
        "SELECT id, attachment_ref FROM messages WHERE created_at < ?",
    )
    .bind(cutoff)
    .fetch_all(db)
    .await?;

    let mut purged = 0u64;
    for (id, attachment_ref) in expired {
        if let Some(blob_ref) = attachment_ref.as_deref() {
            if let Err(err) = blobs.delete(blob_ref).await {
                tracing::warn!(
                    "failed to delete payload {} for message {}: {}",
                    blob_ref,
                    id,
                    err
                );
            }
        }
        let result = sqlx::query("DELETE FROM messages WHERE id = ?")
            .bind(&id)
            .execute(db)
            .await?;
        purged += result.rows_affected();
    }

    if purged > 0 {
        tracing::info!("purged {} expired messages", purged);
    }
    Ok(purged)
}

/// Run the sweep on a fixed cadence for the lifetime of the process.
pub fn spawn(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker =
            tokio::time::interval(Duration::from_secs(state.config.sweep_interval_secs));
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let retention = Duration::from_secs(state.config.retention_window_secs);
            if let Err(err) = sweep_expired(&state.db, &state.blobs, retention).await {
                tracing::error!("retention sweep failed: {}", err);
            }
        }
    })
}
