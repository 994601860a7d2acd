//! Unit and router-level tests for the album service.
//!
//! ## Test Modules
//!
//! - **api_tests**: Album endpoints driven through the full router
//! - **error_tests**: Error classification and HTTP error responses
//! - **config_tests**: Configuration loading and validation
//! - **db_tests**: Schema creation and the SQLite album store
//! - **health_api_tests**: Health, readiness, metrics and version endpoints
//!
//! Run a single module with `cargo test api_tests`.

pub mod health_api_tests;

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::db::{self, AlbumStore};
use crate::types::{Album, NewAlbum};

/// Fresh in-memory database with the album table created.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn setup_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_db(&pool).await.unwrap();
    pool
}

/// File-backed database under `dir`, opened with the service's connect options.
pub async fn setup_file_pool(dir: &Path, max_connections: u32) -> SqlitePool {
    let db_url = format!("sqlite://{}", dir.join("albums.db").display());
    let opts = db::connect_options(&db_url).unwrap().create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(opts)
        .await
        .unwrap();
    db::init_db(&pool).await.unwrap();
    pool
}

/// Store double whose every call fails the way a broken database would.
pub enum FailingStore {
    /// The pool has been shut down.
    Closed,
    /// No connection became free before the acquire timeout.
    TimedOut,
}

impl FailingStore {
    fn error(&self) -> sqlx::Error {
        match self {
            FailingStore::Closed => sqlx::Error::PoolClosed,
            FailingStore::TimedOut => sqlx::Error::PoolTimedOut,
        }
    }
}

#[async_trait]
impl AlbumStore for FailingStore {
    async fn list(&self) -> Result<Vec<Album>, sqlx::Error> {
        Err(self.error())
    }

    async fn insert(&self, _album: &NewAlbum) -> Result<i64, sqlx::Error> {
        Err(self.error())
    }

    async fn get(&self, _id: i64) -> Result<Album, sqlx::Error> {
        Err(self.error())
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        Err(self.error())
    }
}
