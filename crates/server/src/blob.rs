use std::path::PathBuf;

/// Disk-backed store for attachment payloads. The rest of the server only
/// ever carries the opaque ref returned by `put`; payload bytes are never
/// inspected.
#[derive(Clone)]
pub struct BlobStore {
    upload_dir: PathBuf,
}

impl BlobStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    fn payload_path(&self, blob_ref: &str) -> PathBuf {
        self.upload_dir.join(blob_ref)
    }

    /// Store a payload and return its ref.
    pub async fn put(&self, data: &[u8]) -> std::io::Result<String> {
        tokio::fs::create_dir_all(&self.upload_dir).await?;
        let blob_ref = uuid::Uuid::new_v4().to_string();
        tokio::fs::write(self.payload_path(&blob_ref), data).await?;
        Ok(blob_ref)
    }

    /// Resolve a ref to a temporary access URL, or None when the payload
    /// is no longer present.
    pub async fn url(&self, blob_ref: &str, filename: Option<&str>) -> Option<String> {
        if !is_valid_ref(blob_ref) {
            return None;
        }
        match tokio::fs::try_exists(self.payload_path(blob_ref)).await {
            Ok(true) => Some(format!(
                "/api/files/{}/{}",
                blob_ref,
                sanitize_filename(filename.unwrap_or("file"))
            )),
            _ => None,
        }
    }

    /// Open a payload for streaming.
    pub async fn open(&self, blob_ref: &str) -> std::io::Result<tokio::fs::File> {
        if !is_valid_ref(blob_ref) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "malformed blob ref",
            ));
        }
        tokio::fs::File::open(self.payload_path(blob_ref)).await
    }

    /// Remove a payload. Deleting a ref whose payload is already gone
    /// returns the underlying NotFound error; sweep callers treat that as
    /// best-effort.
    pub async fn delete(&self, blob_ref: &str) -> std::io::Result<()> {
        if !is_valid_ref(blob_ref) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "malformed blob ref",
            ));
        }
        tokio::fs::remove_file(self.payload_path(blob_ref)).await
    }
}

/// Refs are v4 UUIDs; anything else is rejected before it can touch a path.
fn is_valid_ref(blob_ref: &str) -> bool {
    uuid::Uuid::parse_str(blob_ref).is_ok()
}

/// Keep URL filename segments to a safe character set.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "file".into()
    } else {
        cleaned
    }
}
