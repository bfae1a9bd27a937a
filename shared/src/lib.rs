//! Shared types for the order-management backend
//!
//! Common types used across crates: domain models, the unified error
//! system, API response structures, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
