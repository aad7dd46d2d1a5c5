// Contract tests for the credit endpoints.
//
// These tests validate the JSON shapes of the wire contract:
// - the create request body
// - the create confirmation body
// - the credit view returned by the GET endpoints
// - the structured error body

use serde_json::json;

#[test]
fn test_create_credit_request_schema() {
    let request = json!({
        "creditValue": 260000.0,
        "dayFirstInstallment": "2027-08-07",
        "numberOfInstallments": 1,
        "customerId": 1
    });

    // Verify required fields
    assert!(request.get("creditValue").is_some(), "creditValue is required");
    assert!(
        request.get("dayFirstInstallment").is_some(),
        "dayFirstInstallment is required"
    );
    assert!(
        request.get("numberOfInstallments").is_some(),
        "numberOfInstallments is required"
    );
    assert!(request.get("customerId").is_some(), "customerId is required");

    // Verify field types
    assert!(request["creditValue"].is_number(), "creditValue must be numeric");
    assert!(
        request["dayFirstInstallment"].is_string(),
        "dayFirstInstallment must be an ISO date string"
    );
    assert!(
        request["numberOfInstallments"].is_i64(),
        "numberOfInstallments must be an integer"
    );
    assert!(request["customerId"].is_i64(), "customerId must be an integer");
}

#[test]
fn test_credit_created_response_schema() {
    let response = json!({
        "message": "Credit 550e8400-e29b-41d4-a716-446655440000 - Customer 1 saved!",
        "creditCode": "550e8400-e29b-41d4-a716-446655440000",
        "creditValue": "260000.0",
        "dayFirstInstallment": "2027-08-07",
        "numberOfInstallments": 1,
        "installmentValue": "260000.0",
        "status": "IN_PROGRESS",
        "customerId": 1
    });

    for field in [
        "message",
        "creditCode",
        "creditValue",
        "dayFirstInstallment",
        "numberOfInstallments",
        "installmentValue",
        "status",
        "customerId",
    ] {
        assert!(
            response.get(field).is_some(),
            "Response must include '{}'",
            field
        );
    }

    // Confirmation line carries the generated code and the customer id
    let message = response["message"].as_str().unwrap();
    assert!(message.starts_with("Credit "));
    assert!(message.ends_with("saved!"));
    assert!(message.contains(response["creditCode"].as_str().unwrap()));
    assert!(message.contains("Customer 1"));
}

#[test]
fn test_credit_view_schema() {
    let view = json!({
        "creditCode": "550e8400-e29b-41d4-a716-446655440000",
        "creditValue": "1200.00",
        "dayFirstInstallment": "2027-01-15",
        "numberOfInstallments": 12,
        "installmentValue": "100.00",
        "status": "IN_PROGRESS",
        "customerId": 7
    });

    for field in [
        "creditCode",
        "creditValue",
        "dayFirstInstallment",
        "numberOfInstallments",
        "installmentValue",
        "status",
        "customerId",
    ] {
        assert!(view.get(field).is_some(), "View must include '{}'", field);
    }

    // Status is one of the lifecycle values
    let status = view["status"].as_str().unwrap();
    assert!(
        ["IN_PROGRESS", "APPROVED", "REJECTED"].contains(&status),
        "Invalid status: {}",
        status
    );
}

#[test]
fn test_structured_error_body_schema() {
    let error = json!({
        "title": "Bad Request! Consult the documentation",
        "timestamp": "2026-08-07T12:00:00Z",
        "status": 400,
        "exception": "creditline::error::BusinessError",
        "details": [
            {"message": "Customer id 999 not found"}
        ]
    });

    assert!(error.get("title").is_some(), "Error must include 'title'");
    assert!(
        error.get("timestamp").is_some(),
        "Error must include 'timestamp'"
    );
    assert!(error.get("status").is_some(), "Error must include 'status'");
    assert!(
        error.get("exception").is_some(),
        "Error must include 'exception'"
    );
    assert!(error.get("details").is_some(), "Error must include 'details'");

    assert_eq!(error["title"], "Bad Request! Consult the documentation");
    assert_eq!(error["status"], 400);

    let details = error["details"].as_array().unwrap();
    assert!(!details.is_empty(), "details must not be empty on failure");
    for detail in details {
        assert!(detail.get("message").is_some(), "each detail has a message");
    }
}

#[test]
fn test_validation_error_details_carry_fields() {
    let error = json!({
        "title": "Bad Request! Consult the documentation",
        "timestamp": "2026-08-07T12:00:00Z",
        "status": 400,
        "exception": "creditline::error::ValidationError",
        "details": [
            {"field": "creditValue", "message": "must be greater than zero"},
            {"field": "numberOfInstallments", "message": "must be greater than zero"}
        ]
    });

    for detail in error["details"].as_array().unwrap() {
        assert!(
            detail.get("field").is_some(),
            "validation details name the violated field"
        );
        assert!(detail.get("message").is_some());
    }
}
