pub mod credit_service;
pub mod installment_calculator;

pub use credit_service::CreditService;
pub use installment_calculator::{InstallmentCalculator, CURRENCY_SCALE};
