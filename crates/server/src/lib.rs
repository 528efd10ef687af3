pub mod blob;
pub mod config;
pub mod db;
pub mod models;
pub mod routes;
pub mod sweeper;

use blob::BlobStore;
use config::Config;

pub struct AppState {
    pub db: sqlx::SqlitePool,
    pub config: Config,
    pub blobs: BlobStore,
}
