// Test Assertion Helpers

use awc::ClientResponse;
use serde_json::Value;

/// Assert HTTP response has the expected status
pub fn assert_status<S>(response: &ClientResponse<S>, expected: u16) {
    let status = response.status();
    assert_eq!(
        status.as_u16(),
        expected,
        "Expected {}, got {} {}",
        expected,
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    );
}

/// Assert body is the `{error: true, message}` validation shape
pub fn assert_validation_error(body: &Value) {
    assert_eq!(body["error"], Value::Bool(true), "body: {}", body);
    assert!(body["message"].is_string(), "message missing: {}", body);
    assert!(body.get("errorCode").is_none(), "unexpected errorCode: {}", body);
}

/// Assert body is the `{error: true, message, details}` transport shape
pub fn assert_transport_error(body: &Value) {
    assert_eq!(body["error"], Value::Bool(true), "body: {}", body);
    assert!(
        body["message"].as_str().is_some_and(|m| !m.is_empty()),
        "message missing: {}",
        body
    );
    assert!(
        body["details"].as_str().is_some_and(|d| !d.is_empty()),
        "details missing: {}",
        body
    );
}
