//! Product API Handlers

use axum::Json;
use axum::extract::{Path, State};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{Product, ProductCreate, ProductUpdate};

use crate::api::validate_payload;
use crate::core::ServerState;
use crate::db::repository::product;

fn product_not_found(id: i64) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {id} not found"))
}

/// GET /api/products - full catalog
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Product>>> {
    let products = product::find_all(&state.pool).await?;
    Ok(ApiResponse::success(products))
}

/// GET /api/products/:id - one product
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Product>> {
    let found = product::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| product_not_found(id))?;
    Ok(ApiResponse::success(found))
}

/// POST /api/products - add to catalog
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<ApiResponse<Product>> {
    validate_payload(&payload)?;
    let created = product::create(&state.pool, payload).await?;
    Ok(ApiResponse::success_with_message(
        "Product created successfully",
        created,
    ))
}

/// PUT /api/products/:id - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<ApiResponse<Product>> {
    validate_payload(&payload)?;
    let updated = match product::update(&state.pool, id, payload).await {
        Ok(p) => p,
        Err(crate::db::repository::RepoError::NotFound(_)) => return Err(product_not_found(id)),
        Err(e) => return Err(e.into()),
    };
    Ok(ApiResponse::success_with_message(
        "Product updated successfully",
        updated,
    ))
}

/// DELETE /api/products/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    if !product::delete(&state.pool, id).await? {
        return Err(product_not_found(id));
    }
    Ok(ApiResponse::ok_with_message("Product deleted successfully"))
}
