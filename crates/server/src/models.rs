use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub public_uuid: String,
    pub name: Option<String>,
    pub created_at: i64,
}

/// Message kind, checked at the deserialization boundary so an unknown
/// value never reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum MessageKind {
    Text,
    Image,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub room_id: String,
    pub kind: MessageKind,
    pub content: String,
    pub attachment_name: Option<String>,
    pub attachment_ref: Option<String>,
    pub sender: String,
    pub created_at: i64,
}

/// A message decorated with a resolved temporary URL for its attachment
/// payload. Messages without an attachment omit the `url` field entirely.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageWithUrl {
    #[serde(flatten)]
    pub message: Message,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
    pub public_uuid: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    pub content: String,
    pub sender: String,
    pub kind: MessageKind,
    pub attachment_name: Option<String>,
    pub attachment_ref: Option<String>,
}
