//! Middleware components for HTTP response processing.

pub mod security_headers;
