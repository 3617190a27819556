//! clinic-server: read-only HTTP query layer over the clinic store
//!
//! Lists and exact-match filters for the `patients` and `providers`
//! tables, served as JSON.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
