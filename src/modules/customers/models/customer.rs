use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer of the credit system.
///
/// Customers are provisioned outside this subsystem; credits only reference
/// them by id. The type exists so lookups can return the full row and so the
/// migration schema has a single source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Declared monthly income, used by credit analysts downstream
    pub income: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
