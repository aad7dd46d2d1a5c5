use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::customers::models::Customer;

/// Customer lookup capability consumed by the credit service.
///
/// Customers are managed elsewhere; this subsystem only ever needs to check
/// that a referenced customer exists and to fetch its row.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>>;

    async fn exists_by_id(&self, id: i64) -> Result<bool>;
}

/// MySQL-backed customer lookups
pub struct MySqlCustomerRepository {
    pool: MySqlPool,
}

impl MySqlCustomerRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for MySqlCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, email, income, created_at
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM customers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0 > 0)
    }
}
