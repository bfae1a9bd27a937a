//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
///
/// `stock_quantity` is the single piece of mutable shared state the
/// order core protects; it never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub price: f64,
    pub stock_quantity: i64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: String,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: i64,
}

/// Update product payload (partial, COALESCE semantics)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProductUpdate {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Stock quantity cannot be negative"))]
    pub stock_quantity: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_create_rejects_negative_price() {
        let payload = ProductCreate {
            name: "Widget".into(),
            description: None,
            category: "tools".into(),
            price: -1.0,
            stock_quantity: 5,
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_product_update_partial_fields_valid() {
        let payload = ProductUpdate {
            name: None,
            description: None,
            category: None,
            price: Some(9.99),
            stock_quantity: None,
        };
        assert!(payload.validate().is_ok());
    }
}
