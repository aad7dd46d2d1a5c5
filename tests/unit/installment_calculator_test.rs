// Unit tests for the installment calculator through the public API.

use creditline::credits::services::InstallmentCalculator;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn whole_value_for_a_single_installment() {
    let value = InstallmentCalculator::installment_value(dec!(260000.0), 1).unwrap();
    assert_eq!(value, dec!(260000.0));
}

#[test]
fn even_division() {
    let value = InstallmentCalculator::installment_value(dec!(2400.00), 24).unwrap();
    assert_eq!(value, dec!(100.00));
}

#[test]
fn uneven_division_rounds_to_cents() {
    let value = InstallmentCalculator::installment_value(dec!(1000), 7).unwrap();
    // 1000 / 7 = 142.857142... -> 142.86
    assert_eq!(value, dec!(142.86));
}

#[test]
fn division_by_zero_is_guarded() {
    assert!(InstallmentCalculator::installment_value(dec!(1000), 0).is_err());
}

proptest! {
    /// The rounded per-installment value stays within half a cent of the
    /// exact quotient, so the total repayment differs from the credit value
    /// by at most half a cent per installment.
    #[test]
    fn total_repayment_stays_close_to_credit_value(
        cents in 1i64..1_000_000_000_000,
        count in 1i32..=120,
    ) {
        let credit_value = Decimal::new(cents, 2);
        let installment = InstallmentCalculator::installment_value(credit_value, count).unwrap();

        prop_assert!(installment >= Decimal::ZERO);

        let total = installment * Decimal::from(count);
        let max_drift = Decimal::new(5, 3) * Decimal::from(count); // 0.005 per installment
        prop_assert!((total - credit_value).abs() <= max_drift);
    }

    #[test]
    fn installment_value_is_positive_when_quotient_is_representable(
        cents in 1i64..1_000_000_000,
        count in 1i32..=48,
    ) {
        let credit_value = Decimal::new(cents, 2);
        let installment = InstallmentCalculator::installment_value(credit_value, count).unwrap();

        // Exact half-cent quotients may round down to zero (ties-to-even)
        let exact = credit_value / Decimal::from(count);
        if exact > Decimal::new(5, 3) {
            prop_assert!(installment > Decimal::ZERO);
        }
    }

    #[test]
    fn nonpositive_count_always_fails(count in -1000i32..=0) {
        prop_assert!(InstallmentCalculator::installment_value(dec!(100), count).is_err());
    }
}
