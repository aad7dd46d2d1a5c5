use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::core::ErrorDetail;

/// Credit lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Under analysis; every new credit starts here
    InProgress,
    Approved,
    Rejected,
}

impl Default for CreditStatus {
    fn default() -> Self {
        CreditStatus::InProgress
    }
}

impl CreditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "IN_PROGRESS",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for CreditStatus {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        match value.as_str() {
            "IN_PROGRESS" => Ok(Self::InProgress),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(format!("Invalid credit status: {}", value)),
        }
    }
}

/// A single credit grant for a customer
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Credit {
    /// Storage key, assigned by the database
    pub id: i64,
    /// Business-facing code, generated at creation and used in URLs
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    /// Due date of the first installment; strictly after the creation date
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    /// Derived: credit_value / number_of_installments at currency precision
    pub installment_value: Decimal,
    #[sqlx(try_from = "String")]
    pub status: CreditStatus,
    pub customer_id: i64,
    pub created_at: DateTime<Utc>,
}

impl Credit {
    /// Assemble a new credit ready for persistence.
    ///
    /// Input constraints are the caller's responsibility (the service runs
    /// `CreateCreditRequest::validate` first); `installment_value` comes from
    /// the installment calculator.
    pub fn new(
        credit_value: Decimal,
        day_first_installment: NaiveDate,
        number_of_installments: i32,
        installment_value: Decimal,
        customer_id: i64,
    ) -> Self {
        Self {
            id: 0, // assigned by the database on insert
            credit_code: Uuid::new_v4(),
            credit_value,
            day_first_installment,
            number_of_installments,
            installment_value,
            status: CreditStatus::InProgress,
            customer_id,
            created_at: Utc::now(),
        }
    }
}

/// Request body for POST /credits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreditRequest {
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub customer_id: i64,
}

impl CreateCreditRequest {
    /// Check every field constraint, collecting one violation per field.
    ///
    /// `today` is passed in so the future-date rule stays deterministic in
    /// tests; callers use the current UTC date.
    pub fn validate(&self, today: NaiveDate) -> Vec<ErrorDetail> {
        let mut violations = Vec::new();

        if self.credit_value <= Decimal::ZERO {
            violations.push(ErrorDetail::of_field(
                "creditValue",
                "must be greater than zero",
            ));
        }

        if self.number_of_installments <= 0 {
            violations.push(ErrorDetail::of_field(
                "numberOfInstallments",
                "must be greater than zero",
            ));
        }

        if self.day_first_installment <= today {
            violations.push(ErrorDetail::of_field(
                "dayFirstInstallment",
                "must be a future date",
            ));
        }

        if self.customer_id <= 0 {
            violations.push(ErrorDetail::of_field(
                "customerId",
                "must be a valid customer id",
            ));
        }

        violations
    }
}

/// Body returned by POST /credits on success: the stored fields plus a
/// human-readable confirmation line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditCreatedResponse {
    pub message: String,
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub installment_value: Decimal,
    pub status: CreditStatus,
    pub customer_id: i64,
}

impl From<&Credit> for CreditCreatedResponse {
    fn from(credit: &Credit) -> Self {
        Self {
            message: format!(
                "Credit {} - Customer {} saved!",
                credit.credit_code, credit.customer_id
            ),
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            day_first_installment: credit.day_first_installment,
            number_of_installments: credit.number_of_installments,
            installment_value: credit.installment_value,
            status: credit.status,
            customer_id: credit.customer_id,
        }
    }
}

/// Public read view of a credit, returned by the GET endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditView {
    pub credit_code: Uuid,
    pub credit_value: Decimal,
    pub day_first_installment: NaiveDate,
    pub number_of_installments: i32,
    pub installment_value: Decimal,
    pub status: CreditStatus,
    pub customer_id: i64,
}

impl From<&Credit> for CreditView {
    fn from(credit: &Credit) -> Self {
        Self {
            credit_code: credit.credit_code,
            credit_value: credit.credit_value,
            day_first_installment: credit.day_first_installment,
            number_of_installments: credit.number_of_installments,
            installment_value: credit.installment_value,
            status: credit.status,
            customer_id: credit.customer_id,
        }
    }
}
