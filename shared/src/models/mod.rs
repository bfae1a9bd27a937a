//! Domain models
//!
//! Entities and request/response payloads shared between the server and
//! its clients. Database row mapping (`sqlx::FromRow`) is gated behind
//! the `db` feature so client-side consumers stay free of sqlx.

pub mod customer;
pub mod order;
pub mod product;

pub use customer::Customer;
pub use order::{
    CreatedOrder, Order, OrderCreate, OrderDetail, OrderFilter, OrderItem, OrderItemCreate,
    OrderStatus, OrderSummary,
};
pub use product::{Product, ProductCreate, ProductUpdate};
