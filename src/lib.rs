//! Taskboard Backend Library
//!
//! Exposes the HTTP surface and its building blocks for use by the server
//! binary and the integration tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod middleware;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
