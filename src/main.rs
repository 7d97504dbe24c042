//! Taskboard Backend - product and task admin API
//!
//! Long-running hosting adapter: loads configuration from the environment,
//! builds the HTTP surface once, and serves it on a TCP listener.

use anyhow::{Context, Result};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskboard_backend::{
    api::{self, AppState},
    auth::{AuthState, CredentialStore, JwtHandler},
    config::Config,
};

/// The single demo account. The hash is computed at seed time; the store
/// never changes afterwards.
const DEMO_EMAIL: &str = "demo@minimals.cc";
const DEMO_PASSWORD: &str = "@demo1";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    init_tracing();

    let config = Config::from_env()?;

    let auth_state = AuthState {
        credentials: Arc::new(CredentialStore::seeded(DEMO_EMAIL, DEMO_PASSWORD)?),
        jwt_handler: Arc::new(JwtHandler::new(config.jwt_secret.clone())),
    };

    let app = api::create_router(auth_state, AppState::new(), &config.cors_origin)?;

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("🎯 API server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Initialize tracing with an env-filter override.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskboard_backend=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
