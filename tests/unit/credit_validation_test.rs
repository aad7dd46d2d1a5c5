// Unit tests for request validation and status serialization through the
// public API.

use chrono::NaiveDate;
use creditline::credits::models::{CreateCreditRequest, CreditStatus};
use rust_decimal_macros::dec;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

fn valid_request() -> CreateCreditRequest {
    CreateCreditRequest {
        credit_value: dec!(15000.00),
        day_first_installment: NaiveDate::from_ymd_opt(2027, 8, 7).unwrap(),
        number_of_installments: 10,
        customer_id: 1,
    }
}

#[test]
fn valid_request_passes() {
    assert!(valid_request().validate(today()).is_empty());
}

#[test]
fn each_violated_field_gets_its_own_detail() {
    let request = CreateCreditRequest {
        credit_value: dec!(0),
        day_first_installment: today(),
        number_of_installments: 0,
        customer_id: 1,
    };

    let violations = request.validate(today());
    assert_eq!(violations.len(), 3);
    assert!(violations.iter().all(|v| v.field.is_some()));
}

#[test]
fn tomorrow_is_a_valid_first_installment_date() {
    let mut request = valid_request();
    request.day_first_installment = today().succ_opt().unwrap();
    assert!(request.validate(today()).is_empty());
}

#[test]
fn status_serializes_screaming_snake_case() {
    assert_eq!(
        serde_json::to_string(&CreditStatus::InProgress).unwrap(),
        "\"IN_PROGRESS\""
    );
    assert_eq!(
        serde_json::to_string(&CreditStatus::Approved).unwrap(),
        "\"APPROVED\""
    );
    assert_eq!(
        serde_json::to_string(&CreditStatus::Rejected).unwrap(),
        "\"REJECTED\""
    );
}

#[test]
fn status_deserializes_from_wire_names() {
    let status: CreditStatus = serde_json::from_str("\"REJECTED\"").unwrap();
    assert_eq!(status, CreditStatus::Rejected);

    assert!(serde_json::from_str::<CreditStatus>("\"CANCELLED\"").is_err());
}
