use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::models::{CreateRoomRequest, CreateRoomResponse, Room};
use crate::AppState;
use drift_shared::validation::validate_room_name;

/// POST /api/rooms
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateRoomRequest>,
) -> impl IntoResponse {
    let name = match body.name {
        Some(raw) => {
            if let Err(msg) = validate_room_name(&raw) {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(serde_json::json!({"error": msg})),
                )
                    .into_response();
            }
            Some(raw.trim().to_string())
        }
        None => None,
    };

    let room_id = uuid::Uuid::new_v4().to_string();
    // Shared in links; v4 UUIDs come from OS randomness, so room links are
    // not guessable.
    let public_uuid = uuid::Uuid::new_v4().to_string();
    let now = chrono::Utc::now().timestamp_millis();

    let result = sqlx::query(
        "INSERT INTO rooms (id, public_uuid, name, created_at) VALUES (?, ?, ?, ?)",
    )
    .bind(&room_id)
    .bind(&public_uuid)
    .bind(&name)
    .bind(now)
    .execute(&state.db)
    .await;

    if result.is_err() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Failed to create room"})),
        )
            .into_response();
    }

    (
        StatusCode::CREATED,
        Json(CreateRoomResponse {
            room_id,
            public_uuid,
        }),
    )
        .into_response()
}

/// GET /api/rooms/by-uuid/:uuid
///
/// A miss is an expected condition (mistyped or stale link), surfaced as a
/// plain 404 rather than a server error.
pub async fn get_room_by_uuid(
    State(state): State<Arc<AppState>>,
    Path(uuid): Path<String>,
) -> impl IntoResponse {
    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE public_uuid = ?")
        .bind(&uuid)
        .fetch_optional(&state.db)
        .await;

    match room {
        Ok(Some(room)) => Json(room).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Room not found"})),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Database error"})),
        )
            .into_response(),
    }
}

/// GET /api/rooms/:roomId
pub async fn get_room_by_id(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<String>,
) -> impl IntoResponse {
    let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = ?")
        .bind(&room_id)
        .fetch_optional(&state.db)
        .await;

    match room {
        Ok(Some(room)) => Json(room).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"error": "Room not found"})),
        )
            .into_response(),
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": "Database error"})),
        )
            .into_response(),
    }
}
