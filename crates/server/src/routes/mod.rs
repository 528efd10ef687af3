pub mod files;
pub mod messages;
pub mod rooms;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

pub fn build_router(state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        // Rooms
        .route("/rooms", post(rooms::create_room))
        .route("/rooms/by-uuid/{uuid}", get(rooms::get_room_by_uuid))
        .route("/rooms/{roomId}", get(rooms::get_room_by_id))
        // Messages
        .route("/rooms/{roomId}/messages", get(messages::list_messages))
        .route("/rooms/{roomId}/messages", post(messages::send_message))
        // Files
        .route("/upload", post(files::upload))
        .route("/files/{ref}/{filename}", get(files::serve_file));

    Router::new().nest("/api", api_routes).with_state(state)
}
