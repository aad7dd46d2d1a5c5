//! In-memory repository implementations backing the service- and
//! controller-level tests. Compiled only for tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::core::Result;
use crate::modules::credits::models::{CreateCreditRequest, Credit};
use crate::modules::credits::repositories::CreditRepository;
use crate::modules::credits::services::CreditService;
use crate::modules::customers::models::Customer;
use crate::modules::customers::repositories::CustomerRepository;

pub struct InMemoryCreditRepository {
    credits: Mutex<Vec<Credit>>,
    next_id: AtomicI64,
}

impl InMemoryCreditRepository {
    pub fn new() -> Self {
        Self {
            credits: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl CreditRepository for InMemoryCreditRepository {
    async fn create(&self, credit: &Credit) -> Result<Credit> {
        let mut created = credit.clone();
        created.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.credits.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_code(&self, credit_code: Uuid) -> Result<Option<Credit>> {
        Ok(self
            .credits
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.credit_code == credit_code)
            .cloned())
    }

    async fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Credit>> {
        Ok(self
            .credits
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.customer_id == customer_id)
            .cloned()
            .collect())
    }
}

pub struct InMemoryCustomerRepository {
    ids: HashSet<i64>,
}

impl InMemoryCustomerRepository {
    pub fn with_ids(ids: &[i64]) -> Self {
        Self {
            ids: ids.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>> {
        if !self.ids.contains(&id) {
            return Ok(None);
        }

        Ok(Some(Customer {
            id,
            first_name: "Test".to_string(),
            last_name: "Customer".to_string(),
            email: format!("customer{}@example.com", id),
            income: Decimal::new(500_000, 2),
            created_at: Utc::now(),
        }))
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool> {
        Ok(self.ids.contains(&id))
    }
}

/// A service wired to in-memory storage, seeded with the given customer ids
pub fn service_with_customers(ids: &[i64]) -> CreditService {
    CreditService::new(
        Arc::new(InMemoryCreditRepository::new()),
        Arc::new(InMemoryCustomerRepository::with_ids(ids)),
    )
}

/// A valid create request one year out, for the given customer
pub fn request_for(customer_id: i64, credit_value: Decimal, installments: i32) -> CreateCreditRequest {
    CreateCreditRequest {
        credit_value,
        day_first_installment: Utc::now().date_naive() + Duration::days(365),
        number_of_installments: installments,
        customer_id,
    }
}
