use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{AlbumStore, SqliteAlbumStore};
use crate::metrics::Metrics;

/// The shared application state.
///
/// Cloned into every handler by Axum's `State` extractor. The album store is
/// injected here instead of living in a global, so tests can swap it for a
/// double.
#[derive(Clone)]
pub struct AppState {
    /// Storage backing the album routes.
    pub albums: Arc<dyn AlbumStore>,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Request counters exposed on `/metrics`.
    pub metrics: Metrics,
}

impl AppState {
    /// Creates state over a SQLite pool.
    pub fn new(db: sqlx::SqlitePool, config: AppConfig) -> Self {
        Self::with_store(Arc::new(SqliteAlbumStore::new(db)), config)
    }

    pub fn with_store(albums: Arc<dyn AlbumStore>, config: AppConfig) -> Self {
        Self { albums, config: Arc::new(config), metrics: Metrics::new() }
    }
}
