//! Authentication Module
//! Mission: Single-account login with signed, time-limited bearer tokens

pub mod api;
pub mod credentials;
pub mod jwt;
pub mod middleware;
pub mod models;

pub use api::AuthState;
pub use credentials::CredentialStore;
pub use jwt::JwtHandler;
pub use middleware::auth_middleware;
