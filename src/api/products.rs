//! Product Endpoints
//! Mission: CRUD handlers for the product collection

use crate::{
    api::routes::{ApiError, AppState},
    models::{Product, ProductFields},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

/// List all products - GET /products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.products.list())
}

/// Create a product - POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Json(fields): Json<ProductFields>,
) -> (StatusCode, Json<Product>) {
    let product = state.products.insert_with(|id| Product::new(id, fields));
    (StatusCode::CREATED, Json(product))
}

/// Update a product - PUT /products/:id
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(fields): Json<ProductFields>,
) -> Result<Json<Product>, ApiError> {
    state
        .products
        .update_with(id, |product| product.apply(fields))
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Delete a product - DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if state.products.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
