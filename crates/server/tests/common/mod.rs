#![allow(dead_code)]

use axum::Router;
use drift_server::{blob::BlobStore, config::Config, db, routes, AppState};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::sync::Arc;

use drift_server::models::MessageKind;

/// Create an in-memory SQLite pool with schema applied.
pub async fn setup_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory SQLite pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();

    db::apply_schema(&pool).await.unwrap();

    pool
}

/// A fresh upload dir per test so blob assertions never cross-talk.
pub fn test_upload_dir() -> String {
    let dir = std::env::temp_dir()
        .join(format!("drift-test-uploads-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.to_string_lossy().into_owned()
}

/// Build a test Axum app with the given pool and upload dir.
pub fn create_test_app(pool: SqlitePool, upload_dir: &str) -> Router {
    let state = Arc::new(AppState {
        db: pool,
        blobs: BlobStore::new(upload_dir),
        config: Config {
            host: "127.0.0.1".into(),
            port: 0,
            database_path: ":memory:".into(),
            upload_dir: upload_dir.into(),
            max_upload_bytes: 10_485_760,
            retention_window_secs: 3_600,
            sweep_interval_secs: 300,
        },
    });

    routes::build_router(state)
}

/// Insert a room directly. Returns (room_id, public_uuid).
pub async fn create_test_room(pool: &SqlitePool, name: Option<&str>) -> (String, String) {
    let room_id = uuid::Uuid::new_v4().to_string();
    let public_uuid = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp_millis();

    sqlx::query("INSERT INTO rooms (id, public_uuid, name, created_at) VALUES (?, ?, ?, ?)")
        .bind(&room_id)
        .bind(&public_uuid)
        .bind(name)
        .bind(now)
        .execute(pool)
        .await
        .unwrap();

    (room_id, public_uuid)
}

/// Insert a message directly with an explicit creation timestamp.
#[allow(clippy::too_many_arguments)]
pub async fn insert_message_at(
    pool: &SqlitePool,
    room_id: &str,
    kind: MessageKind,
    content: &str,
    sender: &str,
    attachment_name: Option<&str>,
    attachment_ref: Option<&str>,
    created_at: i64,
) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    sqlx::query(
        r#"INSERT INTO messages (id, room_id, kind, content, attachment_name, attachment_ref, sender, created_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&id)
    .bind(room_id)
    .bind(kind)
    .bind(content)
    .bind(attachment_name)
    .bind(attachment_ref)
    .bind(sender)
    .bind(created_at)
    .execute(pool)
    .await
    .unwrap();

    id
}

/// Count message rows for a room.
pub async fn message_count(pool: &SqlitePool, room_id: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM messages WHERE room_id = ?")
        .bind(room_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
