//! HTTP Surface
//! Mission: Bind auth and the resource collections into named routes

pub mod products;
pub mod routes;
pub mod tasks;

pub use routes::{create_router, ApiError, AppState};
