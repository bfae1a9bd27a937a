//! Customer Model

use serde::{Deserialize, Serialize};

/// Customer entity
///
/// Owns zero or more orders; deleting a customer cascades to its orders
/// at the store level (FK `ON DELETE CASCADE`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Customer {
    /// Full display name, used in order summaries
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
