//! Order API Handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use shared::error::{ApiResponse, AppError, AppResult};
use shared::models::{CreatedOrder, OrderCreate, OrderDetail, OrderFilter, OrderStatus, OrderSummary};

use crate::api::validate_payload;
use crate::core::ServerState;
use crate::orders::service;
use crate::utils::PaginatedResponse;

#[derive(serde::Deserialize)]
pub struct OrderListQuery {
    pub status: Option<String>,
    pub customer_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// POST /api/orders - place an order
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<ApiResponse<CreatedOrder>> {
    validate_payload(&payload)?;
    if payload.order_date < chrono::Utc::now().date_naive() {
        return Err(AppError::validation("Order date cannot be in the past"));
    }

    let created = service::create_order(&state.pool, payload).await?;
    Ok(ApiResponse::success_with_message(
        format!("Order {} created successfully", created.order_id),
        created,
    ))
}

/// GET /api/orders - filtered, paginated listing
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<OrderListQuery>,
) -> AppResult<ApiResponse<PaginatedResponse<OrderSummary>>> {
    let status = match &query.status {
        Some(raw) => Some(OrderStatus::parse(raw).ok_or_else(|| {
            AppError::validation(format!("Unknown order status: {raw}"))
        })?),
        None => None,
    };
    let filter = OrderFilter {
        status,
        customer_id: query.customer_id,
        min_price: query.min_price,
        max_price: query.max_price,
    };

    let page = service::get_orders(&state.pool, filter, query.page, query.page_size).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/orders/:id - order with line items
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<OrderDetail>> {
    let detail = service::get_order(&state.pool, id).await?;
    Ok(ApiResponse::success(detail))
}

/// DELETE /api/orders/:id - delete and restore stock
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<ApiResponse<()>> {
    service::delete_order(&state.pool, id).await?;
    Ok(ApiResponse::ok_with_message(format!(
        "Order {id} deleted successfully"
    )))
}

/// GET /api/orders/customer/:customer_id - a customer's orders
pub async fn by_customer(
    State(state): State<ServerState>,
    Path(customer_id): Path<i64>,
) -> AppResult<ApiResponse<Vec<OrderSummary>>> {
    let orders = service::get_customer_orders(&state.pool, customer_id).await?;
    Ok(ApiResponse::success(orders))
}
