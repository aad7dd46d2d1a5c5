use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{Credit, CreditStatus};

/// Persistence boundary for credits
#[async_trait]
pub trait CreditRepository: Send + Sync {
    /// Insert a credit and return it with the database-assigned id
    async fn create(&self, credit: &Credit) -> Result<Credit>;

    /// Look a credit up by its business-facing code
    async fn find_by_code(&self, credit_code: Uuid) -> Result<Option<Credit>>;

    /// All credits of a customer, in insertion order
    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>>;
}

/// MySQL-backed credit persistence
pub struct MySqlCreditRepository {
    pool: MySqlPool,
}

impl MySqlCreditRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CreditRepository for MySqlCreditRepository {
    async fn create(&self, credit: &Credit) -> Result<Credit> {
        let result = sqlx::query(
            r#"
            INSERT INTO credits (
                credit_code, credit_value, day_first_installment,
                number_of_installments, installment_value, status,
                customer_id, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(credit.credit_code.to_string())
        .bind(credit.credit_value)
        .bind(credit.day_first_installment)
        .bind(credit.number_of_installments)
        .bind(credit.installment_value)
        .bind(credit.status.as_str())
        .bind(credit.customer_id)
        .bind(credit.created_at)
        .execute(&self.pool)
        .await?;

        let mut created = credit.clone();
        created.id = result.last_insert_id() as i64;

        Ok(created)
    }

    async fn find_by_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        let row = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, installment_value, status,
                   customer_id, created_at
            FROM credits
            WHERE credit_code = ?
            "#,
        )
        .bind(credit_code.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(CreditRow::into_credit).transpose()
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>> {
        let rows = sqlx::query_as::<_, CreditRow>(
            r#"
            SELECT id, credit_code, credit_value, day_first_installment,
                   number_of_installments, installment_value, status,
                   customer_id, created_at
            FROM credits
            WHERE customer_id = ?
            ORDER BY id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(CreditRow::into_credit).collect()
    }
}

/// Raw credit row; codes and statuses live as strings in MySQL
#[derive(Debug, FromRow)]
struct CreditRow {
    id: i64,
    credit_code: String,
    credit_value: rust_decimal::Decimal,
    day_first_installment: chrono::NaiveDate,
    number_of_installments: i32,
    installment_value: rust_decimal::Decimal,
    status: String,
    customer_id: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl CreditRow {
    fn into_credit(self) -> Result<Credit> {
        let credit_code = Uuid::parse_str(&self.credit_code)
            .map_err(|e| AppError::internal(format!("Invalid credit code in database: {}", e)))?;
        let status = CreditStatus::try_from(self.status)
            .map_err(|e| AppError::internal(format!("Invalid status in database: {}", e)))?;

        Ok(Credit {
            id: self.id,
            credit_code,
            credit_value: self.credit_value,
            day_first_installment: self.day_first_installment,
            number_of_installments: self.number_of_installments,
            installment_value: self.installment_value,
            status,
            customer_id: self.customer_id,
            created_at: self.created_at,
        })
    }
}
