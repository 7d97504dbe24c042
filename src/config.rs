//! Server Configuration
//! Mission: Load all runtime settings from the environment at startup

use anyhow::{Context, Result};
use std::env;

/// Runtime configuration, read once in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the HTTP server binds on.
    pub port: u16,
    /// HMAC secret for signing and verifying JWTs.
    pub jwt_secret: String,
    /// The single origin allowed by CORS (the dashboard dev server).
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let jwt_secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(3000);

        let cors_origin =
            env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:8081".to_string());

        Ok(Self {
            port,
            jwt_secret,
            cors_origin,
        })
    }
}
