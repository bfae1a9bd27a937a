//! Unified error codes for the order-management backend
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 2xxx: Customer errors
//! - 4xxx: Order errors
//! - 6xxx: Product errors
//! - 8xxx: Query (NL-to-SQL) errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid identifier (non-positive)
    InvalidId = 6,

    // ==================== 2xxx: Customer ====================
    /// Customer not found
    CustomerNotFound = 2001,
    /// Customer email already registered
    CustomerEmailExists = 2002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4002,
    /// Order exceeds the line item limit
    OrderTooManyItems = 4003,
    /// Requested quantity exceeds available stock
    InsufficientStock = 4004,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product has invalid price
    ProductInvalidPrice = 6002,

    // ==================== 8xxx: Query (NL-to-SQL) ====================
    /// Natural-language query is empty
    QueryEmpty = 8001,
    /// Generated statement is not a read-only SELECT
    QueryNotReadOnly = 8002,
    /// Generated SQL failed to execute
    QueryExecutionFailed = 8003,
    /// SQL generation via the language model failed
    SqlGenerationFailed = 8004,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidId => "Invalid identifier",

            // Customer
            ErrorCode::CustomerNotFound => "Customer not found",
            ErrorCode::CustomerEmailExists => "Customer email already registered",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no line items",
            ErrorCode::OrderTooManyItems => "An order can have a maximum of 3 products",
            ErrorCode::InsufficientStock => "Insufficient stock",

            // Product
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",

            // Query
            ErrorCode::QueryEmpty => "Query cannot be empty",
            ErrorCode::QueryNotReadOnly => "Only read-only SELECT statements can be executed",
            ErrorCode::QueryExecutionFailed => "Generated SQL failed to execute",
            ErrorCode::SqlGenerationFailed => "SQL generation failed",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidId,
            2001 => ErrorCode::CustomerNotFound,
            2002 => ErrorCode::CustomerEmailExists,
            4001 => ErrorCode::OrderNotFound,
            4002 => ErrorCode::OrderEmpty,
            4003 => ErrorCode::OrderTooManyItems,
            4004 => ErrorCode::InsufficientStock,
            6001 => ErrorCode::ProductNotFound,
            6002 => ErrorCode::ProductInvalidPrice,
            8001 => ErrorCode::QueryEmpty,
            8002 => ErrorCode::QueryNotReadOnly,
            8003 => ErrorCode::QueryExecutionFailed,
            8004 => ErrorCode::SqlGenerationFailed,
            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::NetworkError,
            9005 => ErrorCode::ConfigError,
            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::CustomerNotFound.code(), 2001);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::InsufficientStock.code(), 4004);
        assert_eq!(ErrorCode::ProductNotFound.code(), 6001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_round_trip_u16() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::CustomerNotFound,
            ErrorCode::OrderNotFound,
            ErrorCode::InsufficientStock,
            ErrorCode::ProductNotFound,
            ErrorCode::QueryNotReadOnly,
            ErrorCode::DatabaseError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value).unwrap(), code);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::OrderNotFound.is_success());
    }
}
