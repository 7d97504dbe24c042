use crate::{
    auth::{self, AuthState},
    middleware::request_logging,
    models::{Product, Task},
    store::Collection,
};
use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use super::{products, tasks};

/// Shared application state: one collection per resource, constructed once at
/// startup and injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<Collection<Product>>,
    pub tasks: Arc<Collection<Task>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            products: Arc::new(Collection::new()),
            tasks: Arc::new(Collection::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the complete HTTP surface.
///
/// Built exactly once; every hosting adapter (the server binary, the
/// integration tests) serves this same router.
pub fn create_router(
    auth_state: AuthState,
    app_state: AppState,
    cors_origin: &str,
) -> Result<Router> {
    let origin = cors_origin
        .parse::<HeaderValue>()
        .context("Invalid CORS origin")?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    // Login is the entry point; it is the one route the guard never covers.
    let auth_router = Router::new()
        .route("/login", post(auth::api::login))
        .with_state(auth_state.clone());

    let protected_routes = Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/:id",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/:id",
            put(tasks::update_task).delete(tasks::delete_task),
        )
        .route_layer(middleware::from_fn_with_state(
            auth_state.jwt_handler.clone(),
            auth::auth_middleware,
        ))
        .with_state(app_state);

    let public_routes = Router::new().route("/health", get(health_check));

    Ok(Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(auth_router)
        .layer(middleware::from_fn(request_logging))
        .layer(cors))
}

// ===== Route Handlers =====

/// Health check endpoint
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

// ===== Error Handling =====

/// Errors surfaced by the collection handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            // Empty body, matching the contract.
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
        }
    }
}
