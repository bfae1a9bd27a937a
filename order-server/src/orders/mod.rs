//! Order Service
//!
//! Owns every invariant that spans tables: stock never goes negative,
//! an order and its items appear or disappear together, and a failed
//! creation leaves the database untouched. Repositories stay thin;
//! everything transactional lives here.

pub mod service;

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

use crate::db::repository::RepoError;

/// Order service error taxonomy
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Invalid order id: {0}")]
    InvalidId(i64),

    #[error("Customer {0} not found")]
    CustomerNotFound(i64),

    #[error("Product {0} not found")]
    ProductNotFound(i64),

    #[error("Order {0} not found")]
    OrderNotFound(i64),

    #[error("Not enough stock for '{name}': requested {requested}, available {available}")]
    InsufficientStock {
        product_id: i64,
        name: String,
        requested: i64,
        available: i64,
    },

    #[error("Database error: {0}")]
    Database(String),
}

impl From<RepoError> for OrderError {
    fn from(err: RepoError) -> Self {
        OrderError::Database(err.to_string())
    }
}

impl From<sqlx::Error> for OrderError {
    fn from(err: sqlx::Error) -> Self {
        OrderError::Database(err.to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match &err {
            OrderError::InvalidId(id) => {
                AppError::with_message(ErrorCode::InvalidId, err.to_string())
                    .with_detail("id", *id)
            }
            OrderError::CustomerNotFound(id) => {
                AppError::with_message(ErrorCode::CustomerNotFound, err.to_string())
                    .with_detail("customer_id", *id)
            }
            OrderError::ProductNotFound(id) => {
                AppError::with_message(ErrorCode::ProductNotFound, err.to_string())
                    .with_detail("product_id", *id)
            }
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, err.to_string())
                    .with_detail("order_id", *id)
            }
            OrderError::InsufficientStock {
                product_id,
                requested,
                available,
                ..
            } => AppError::with_message(ErrorCode::InsufficientStock, err.to_string())
                .with_detail("product_id", *product_id)
                .with_detail("requested", *requested)
                .with_detail("available", *available),
            OrderError::Database(msg) => AppError::database(msg.clone()),
        }
    }
}
