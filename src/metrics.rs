use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Request counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub albums_listed: Arc<AtomicU64>,
    pub albums_created: Arc<AtomicU64>,
    pub albums_fetched: Arc<AtomicU64>,
    pub albums_not_found: Arc<AtomicU64>,
    pub storage_errors: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            albums_listed: Arc::new(AtomicU64::new(0)),
            albums_created: Arc::new(AtomicU64::new(0)),
            albums_fetched: Arc::new(AtomicU64::new(0)),
            albums_not_found: Arc::new(AtomicU64::new(0)),
            storage_errors: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_listed(&self) {
        self.albums_listed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_created(&self) {
        self.albums_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_fetched(&self) {
        self.albums_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_not_found(&self) {
        self.albums_not_found.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_storage_errors(&self) {
        self.storage_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            albums_listed: self.albums_listed.load(Ordering::Relaxed),
            albums_created: self.albums_created.load(Ordering::Relaxed),
            albums_fetched: self.albums_fetched.load(Ordering::Relaxed),
            albums_not_found: self.albums_not_found.load(Ordering::Relaxed),
            storage_errors: self.storage_errors.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub albums_listed: u64,
    pub albums_created: u64,
    pub albums_fetched: u64,
    pub albums_not_found: u64,
    pub storage_errors: u64,
    pub uptime_seconds: u64,
}
