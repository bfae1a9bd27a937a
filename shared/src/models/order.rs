//! Order Model
//!
//! Orders and their line items are created and destroyed together; a
//! line item's price is frozen at order time and does not track later
//! catalog price changes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order lifecycle status
///
/// The core only ever creates `Pending` orders; `Completed` and
/// `Canceled` exist for filtering and future transition logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum OrderStatus {
    Pending,
    Completed,
    Canceled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
            Self::Canceled => "Canceled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(Self::Pending),
            "Completed" => Some(Self::Completed),
            "Canceled" => Some(Self::Canceled),
            _ => None,
        }
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub order_date: NaiveDate,
    pub total_amount: f64,
    pub status: OrderStatus,
}

/// Order line item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

/// One line of an order-creation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    pub product_id: i64,
    #[validate(range(min = 1, message = "Quantity must be greater than 0"))]
    pub quantity: i64,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: f64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub order_date: NaiveDate,
    #[validate(
        length(min = 1, max = 3, message = "An order can have between 1 and 3 products"),
        nested
    )]
    pub items: Vec<OrderItemCreate>,
}

/// Filter options for order listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<i64>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

/// Order with customer info (for list views)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderSummary {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: String,
    pub order_date: NaiveDate,
    pub total_amount: f64,
    pub status: OrderStatus,
}

/// Order summary plus line items (for detail views)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    #[serde(flatten)]
    pub order: OrderSummary,
    pub items: Vec<OrderItem>,
}

/// Result payload of a successful order creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedOrder {
    pub order_id: i64,
    pub total_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, quantity: i64, price: f64) -> OrderItemCreate {
        OrderItemCreate {
            product_id,
            quantity,
            price,
        }
    }

    fn payload(items: Vec<OrderItemCreate>) -> OrderCreate {
        OrderCreate {
            customer_id: 1,
            order_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            items,
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Completed,
            OrderStatus::Canceled,
        ] {
            assert_eq!(OrderStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse("Shipped"), None);
    }

    #[test]
    fn test_order_create_valid() {
        assert!(payload(vec![item(1, 2, 9.99)]).validate().is_ok());
    }

    #[test]
    fn test_order_create_rejects_empty_items() {
        assert!(payload(vec![]).validate().is_err());
    }

    #[test]
    fn test_order_create_rejects_more_than_three_items() {
        let items = vec![
            item(1, 1, 1.0),
            item(2, 1, 1.0),
            item(3, 1, 1.0),
            item(4, 1, 1.0),
        ];
        assert!(payload(items).validate().is_err());
    }

    #[test]
    fn test_order_create_rejects_zero_quantity() {
        assert!(payload(vec![item(1, 0, 1.0)]).validate().is_err());
    }

    #[test]
    fn test_order_create_rejects_negative_price() {
        assert!(payload(vec![item(1, 1, -0.5)]).validate().is_err());
    }

    #[test]
    fn test_order_detail_serializes_flat() {
        let detail = OrderDetail {
            order: OrderSummary {
                id: 10,
                customer_id: 1,
                customer_name: "Ada Lovelace".into(),
                order_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
                total_amount: 17.5,
                status: OrderStatus::Pending,
            },
            items: vec![],
        };
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["id"], 10);
        assert_eq!(json["status"], "Pending");
        assert!(json["items"].as_array().unwrap().is_empty());
    }
}
