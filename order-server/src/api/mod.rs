//! API Router Module
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`customers`] - customer lookups
//! - [`products`] - product catalog CRUD
//! - [`orders`] - order creation, listing, deletion
//! - [`nlp`] - natural-language queries

pub mod customers;
pub mod health;
pub mod nlp;
pub mod orders;
pub mod products;

use axum::Router;
use shared::error::AppError;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use validator::Validate;

use crate::core::ServerState;

/// Assemble the full application router.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(customers::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(nlp::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Run `validator` checks and fold field errors into one AppError.
pub(crate) fn validate_payload(payload: &impl Validate) -> Result<(), AppError> {
    payload.validate().map_err(|errors| {
        let mut err = AppError::validation("Request validation failed");
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<String> = field_errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            err = err.with_detail(field.to_string(), messages.join("; "));
        }
        err
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "must not be empty"))]
        name: String,
    }

    #[test]
    fn test_validate_payload_collects_field_errors() {
        assert!(validate_payload(&Sample { name: "ok".into() }).is_ok());

        let err = validate_payload(&Sample { name: "".into() }).unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert!(details.get("name").unwrap().as_str().unwrap().contains("must not be empty"));
    }
}
