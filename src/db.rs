use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::types::{Album, NewAlbum};

/// Connection options for `url` with the pragmas every pooled connection needs.
///
/// `synchronous` and `busy_timeout` are per-connection settings, so they go on
/// the connect options rather than through a query on the pool.
pub fn connect_options(url: &str) -> anyhow::Result<SqliteConnectOptions> {
    let opts = SqliteConnectOptions::from_str(url)?
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(10));
    Ok(opts)
}

pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS album (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            artist TEXT NOT NULL,
            price REAL NOT NULL
        )"#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Storage operations the HTTP handlers depend on.
///
/// Implementations report a missing row as `sqlx::Error::RowNotFound` so the
/// handlers can map it to a 404 without knowing the backend.
#[async_trait]
pub trait AlbumStore: Send + Sync {
    /// All albums in storage order.
    async fn list(&self) -> Result<Vec<Album>, sqlx::Error>;
    /// Inserts a row and returns the id the database assigned to it.
    async fn insert(&self, album: &NewAlbum) -> Result<i64, sqlx::Error>;
    async fn get(&self, id: i64) -> Result<Album, sqlx::Error>;
    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

/// `AlbumStore` backed by a SQLite connection pool.
#[derive(Clone)]
pub struct SqliteAlbumStore {
    pool: SqlitePool,
}

impl SqliteAlbumStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AlbumStore for SqliteAlbumStore {
    async fn list(&self) -> Result<Vec<Album>, sqlx::Error> {
        sqlx::query_as::<_, Album>("SELECT id, title, artist, price FROM album")
            .fetch_all(&self.pool)
            .await
    }

    async fn insert(&self, album: &NewAlbum) -> Result<i64, sqlx::Error> {
        let res = sqlx::query("INSERT INTO album (title, artist, price) VALUES (?1, ?2, ?3)")
            .bind(&album.title)
            .bind(&album.artist)
            .bind(album.price)
            .execute(&self.pool)
            .await?;
        Ok(res.last_insert_rowid())
    }

    async fn get(&self, id: i64) -> Result<Album, sqlx::Error> {
        sqlx::query_as::<_, Album>("SELECT id, title, artist, price FROM album WHERE id = ?1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await.map(|_| ())
    }
}
