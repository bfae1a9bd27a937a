//! Order-Management Backend
//!
//! An HTTP backend for a small storefront: customer and product
//! catalogs, transactional order placement with stock tracking, and a
//! natural-language query endpoint backed by an external model.

pub mod api;
pub mod core;
pub mod db;
pub mod nlp;
pub mod orders;
pub mod utils;
