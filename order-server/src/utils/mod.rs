//! Utility Module

pub mod logger;
pub mod pagination;

pub use pagination::PaginatedResponse;
