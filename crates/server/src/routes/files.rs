use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tokio_util::io::ReaderStream;

use crate::AppState;

/// POST /api/upload
///
/// Accepts a single multipart field and stores it as an attachment payload.
/// The returned ref is what a subsequent send-message carries in
/// `attachmentRef`.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "No file provided"})),
            )
                .into_response()
        }
    };

    let original_filename = field.file_name().unwrap_or("file").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({"error": "Failed to read file"})),
            )
                .into_response()
        }
    };

    let size = data.len() as u64;
    if size > state.config.max_upload_bytes {
        return (
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(serde_json::json!({
                "error": format!("File too large. Max size: {} MB", state.config.max_upload_bytes / 1_048_576)
            })),
        )
            .into_response();
    }

    let blob_ref = match state.blobs.put(&data).await {
        Ok(r) => r,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": "Failed to save file"})),
            )
                .into_response()
        }
    };

    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "ref": blob_ref,
            "filename": original_filename,
            "size": size,
        })),
    )
        .into_response()
}

/// GET /api/files/:ref/:filename
///
/// Target of resolved attachment URLs; streams the payload bytes. The
/// filename segment is cosmetic apart from driving the content type.
pub async fn serve_file(
    State(state): State<Arc<AppState>>,
    Path((blob_ref, filename)): Path<(String, String)>,
) -> impl IntoResponse {
    let file = match state.blobs.open(&blob_ref).await {
        Ok(f) => f,
        Err(_) => {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({"error": "File not found"})),
            )
                .into_response()
        }
    };

    let stream = ReaderStream::new(file);
    let body = Body::from_stream(stream);

    (
        [
            (header::CONTENT_TYPE, content_type_for(&filename)),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

fn content_type_for(filename: &str) -> String {
    let ext = filename.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
    .to_string()
}
