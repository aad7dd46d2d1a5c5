use rust_decimal::Decimal;
use tracing::debug;

use crate::core::{AppError, Result};

/// Decimal places of the currency amounts handled by the system
pub const CURRENCY_SCALE: u32 = 2;

/// Calculator for per-installment repayment values
pub struct InstallmentCalculator;

impl InstallmentCalculator {
    /// Value of one installment: `credit_value / number_of_installments`,
    /// rounded to currency precision.
    ///
    /// Guards against a non-positive installment count (division by zero)
    /// and a non-positive credit value; both are caller errors.
    pub fn installment_value(
        credit_value: Decimal,
        number_of_installments: i32,
    ) -> Result<Decimal> {
        if number_of_installments <= 0 {
            return Err(AppError::invalid_field(
                "numberOfInstallments",
                "must be greater than zero",
            ));
        }

        if credit_value <= Decimal::ZERO {
            return Err(AppError::invalid_field(
                "creditValue",
                "must be greater than zero",
            ));
        }

        let value = (credit_value / Decimal::from(number_of_installments))
            .round_dp(CURRENCY_SCALE);

        debug!(
            %credit_value,
            number_of_installments,
            installment_value = %value,
            "calculated installment value"
        );

        Ok(value)
    }
}
