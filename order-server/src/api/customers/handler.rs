//! Customer API Handlers

use axum::extract::{Path, State};
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::Customer;

use crate::core::ServerState;
use crate::db::repository::customer;

/// GET /api/customers - all customers
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Customer>>> {
    let customers = customer::find_all(&state.pool).await?;
    Ok(ApiResponse::success(customers))
}

/// GET /api/customers/:id - one customer
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<Customer>> {
    let found = customer::find_by_id(&state.pool, id).await?.ok_or_else(|| {
        AppError::with_message(ErrorCode::CustomerNotFound, format!("Customer {id} not found"))
    })?;
    Ok(ApiResponse::success(found))
}
