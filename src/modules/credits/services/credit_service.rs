use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::credits::models::{CreateCreditRequest, Credit};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::credits::services::installment_calculator::InstallmentCalculator;
use crate::modules::customers::repositories::CustomerRepository;

/// Orchestrates credit creation and queries
pub struct CreditService {
    credit_repo: Arc<dyn CreditRepository>,
    customer_repo: Arc<dyn CustomerRepository>,
}

impl CreditService {
    pub fn new(
        credit_repo: Arc<dyn CreditRepository>,
        customer_repo: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            credit_repo,
            customer_repo,
        }
    }

    /// Validate the request, check the referenced customer, derive the
    /// installment value and persist the credit.
    pub async fn create(&self, request: CreateCreditRequest) -> Result<Credit> {
        let violations = request.validate(Utc::now().date_naive());
        if !violations.is_empty() {
            return Err(AppError::validation(violations));
        }

        if !self.customer_repo.exists_by_id(request.customer_id).await? {
            return Err(AppError::business(format!(
                "Customer id {} not found",
                request.customer_id
            )));
        }

        let installment_value = InstallmentCalculator::installment_value(
            request.credit_value,
            request.number_of_installments,
        )?;

        let credit = Credit::new(
            request.credit_value,
            request.day_first_installment,
            request.number_of_installments,
            installment_value,
            request.customer_id,
        );

        let created = self.credit_repo.create(&credit).await?;

        info!(
            credit_code = %created.credit_code,
            customer_id = created.customer_id,
            "credit saved"
        );

        Ok(created)
    }

    /// Fetch a credit by its code, enforcing that it belongs to the given
    /// customer.
    pub async fn find_by_code(&self, credit_code: Uuid, customer_id: i64) -> Result<Credit> {
        let credit = self
            .credit_repo
            .find_by_code(credit_code)
            .await?
            .ok_or_else(|| {
                AppError::business(format!("Credit code {} not found", credit_code))
            })?;

        if credit.customer_id != customer_id {
            return Err(AppError::business(format!(
                "Credit code {} does not belong to customer id {}",
                credit_code, customer_id
            )));
        }

        Ok(credit)
    }

    /// All credits of a customer, oldest first. Empty is not an error, but an
    /// unknown customer is.
    pub async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>> {
        if !self.customer_repo.exists_by_id(customer_id).await? {
            return Err(AppError::business(format!(
                "Customer id {} not found",
                customer_id
            )));
        }

        self.credit_repo.list_by_customer(customer_id).await
    }
}
