//! # Albums Backend Library
//!
//! A small JSON API over a single `album` table: list every album, create one,
//! or fetch one by id.
//!
//! ## Architecture
//!
//! - **Axum**: HTTP server and routing
//! - **SQLx**: Asynchronous database access with SQLite
//! - **Tokio**: Async runtime
//! - **Serde**: JSON request and response bodies
//!
//! ## Core Components
//!
//! - [`config`]: Layered configuration (embedded defaults, files, environment)
//! - [`db`]: Schema initialization and the [`db::AlbumStore`] data access seam
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Request counters
//! - [`middleware`]: Response security headers
//! - [`routes`]: HTTP endpoint handlers and the router
//! - [`state`]: Shared application state
//! - [`types`]: The album record and its request shape

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
