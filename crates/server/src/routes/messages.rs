use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::models::{Message, MessageWithUrl, SendMessageRequest};
use crate::AppState;
use drift_shared::validation::{
    validate_attachment_name, validate_message_content, validate_sender,
};

/// GET /api/rooms/:roomId/messages
///
/// Full newest-first snapshot of a room's history. An unknown room yields an
/// empty list — room existence is the caller's concern, not this query's.
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let items = sqlx::query_as::<_, Message>(
        "SELECT * FROM messages WHERE room_id = ? ORDER BY created_at DESC",
    )
    .bind(&room_id)
    .fetch_all(&state.db)
    .await;

    let items = match items {
        Ok(items) => items,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Database error"})),
            )
                .into_response()
        }
    };

    // One independent resolution call per attachment; issue them
    // concurrently rather than one at a time.
    let decorated = futures::future::join_all(items.into_iter().map(|message| {
        let blobs = state.blobs.clone();
        async move {
            let url = match message.attachment_ref.as_deref() {
                Some(blob_ref) => {
                    blobs
                        .url(blob_ref, message.attachment_name.as_deref())
                        .await
                }
                None => None,
            };
            MessageWithUrl { message, url }
        }
    }))
    .await;

    Json(decorated).into_response()
}

/// POST /api/rooms/:roomId/messages
///
/// Pure append. The room id is checked for shape only; callers are trusted
/// to have resolved the room already, and the retention sweep bounds the
/// cost of anything written against a stale id.
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
    Json(body): Json<SendMessageRequest>,
) -> impl IntoResponse {
    if uuid::Uuid::parse_str(&room_id).is_err() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": "Malformed room id"})),
        )
            .into_response();
    }
    if let Err(msg) = validate_message_content(&body.content) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response();
    }
    if let Err(msg) = validate_sender(&body.sender) {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"error": msg})),
        )
            .into_response();
    }
    if let Some(name) = body.attachment_name.as_deref() {
        if let Err(msg) = validate_attachment_name(name) {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": msg})),
            )
                .into_response();
        }
    }

    let id = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp_millis();

    let result = sqlx::query(
        r#"INSERT INTO messages (id, room_id, kind, content, attachment_name, attachment_ref, sender, created_at)
           VALUES (?, ?, ?, ?, ?, ?, ?, ?)"#,
    )
    .bind(&id)
    .bind(&room_id)
    .bind(body.kind)
    .bind(&body.content)
    .bind(&body.attachment_name)
    .bind(&body.attachment_ref)
    .bind(&body.sender)
    .bind(now)
    .execute(&state.db)
    .await;

    if result.is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Failed to save message"})),
        )
            .into_response();
    }

    (StatusCode::CREATED, Json(serde_json::json!({"id": id}))).into_response()
}
