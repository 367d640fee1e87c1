// Integration tests for POST /api/payment/status against the gateway sandbox

#[path = "../helpers/mod.rs"]
mod helpers;

use helpers::*;
use serde_json::{json, Value};

const ORDER_ID: &str = "70906e55-7114-41d6-8332-4609dc6590f4";

async fn query_status(srv: &actix_test::TestServer, payload: &Value) -> (u16, Value) {
    let mut response = srv
        .post("/api/payment/status")
        .send_json(payload)
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[actix_web::test]
async fn test_paid_status_is_relayed_unchanged() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::ok(json!({
        "orderStatus": 2,
        "orderNumber": "cert_123",
        "amount": 15000
    })));
    let srv = spawn_proxy(&sandbox);

    let (status, body) = query_status(&srv, &TestDataFactory::status_payload(ORDER_ID)).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({"success": true, "orderStatus": 2, "orderNumber": "cert_123", "amount": 15000})
    );
}

#[actix_web::test]
async fn test_status_sends_order_id_and_token() {
    let sandbox = BankGatewaySandbox::start();
    let srv = spawn_proxy(&sandbox);

    let (status, _) = query_status(&srv, &TestDataFactory::status_payload(ORDER_ID)).await;
    assert_eq!(status, 200);

    let calls = sandbox.calls_to(STATUS_ENDPOINT);
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].field("orderId"), Some(ORDER_ID));
    assert_eq!(calls[0].field("token"), Some(TEST_MERCHANT_TOKEN));
    assert_eq!(calls[0].form.len(), 2);
}

#[actix_web::test]
async fn test_success_error_code_and_unlisted_fields_are_not_forwarded() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::ok(json!({
        "errorCode": "0",
        "errorMessage": "Success",
        "orderStatus": 6,
        "orderNumber": "cert_1700000000000_k3j5h2l9q",
        "amount": 250000,
        "currency": "643",
        "actionCode": -2007,
        "actionCodeDescription": "Payment time limit exceeded",
        "date": 1700000000000_i64,
        "ip": "10.0.0.1",
        "cardAuthInfo": {"pan": "411111**1111"},
        "merchantOrderParams": [{"name": "clinic", "value": "main"}]
    })));
    let srv = spawn_proxy(&sandbox);

    let (status, body) = query_status(&srv, &TestDataFactory::status_payload(ORDER_ID)).await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        json!({
            "success": true,
            "orderStatus": 6,
            "orderNumber": "cert_1700000000000_k3j5h2l9q",
            "amount": 250000,
            "currency": "643",
            "actionCode": -2007,
            "actionCodeDescription": "Payment time limit exceeded",
            "date": 1700000000000_i64,
            "ip": "10.0.0.1"
        })
    );
}

#[actix_web::test]
async fn test_missing_order_id_never_calls_gateway() {
    let sandbox = BankGatewaySandbox::start();
    let srv = spawn_proxy(&sandbox);

    for payload in [json!({}), json!({"orderId": ""}), json!({"orderId": null})] {
        let (status, body) = query_status(&srv, &payload).await;
        assert_eq!(status, 400);
        assert_eq!(
            body,
            json!({"error": true, "message": "Missing required field: orderId"})
        );
    }

    assert!(sandbox.calls().is_empty());
}

#[actix_web::test]
async fn test_status_business_error_is_400() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::ok(json!({
        "errorCode": "6",
        "errorMessage": "Order not found"
    })));
    let srv = spawn_proxy(&sandbox);

    let (status, body) = query_status(&srv, &TestDataFactory::status_payload("unknown")).await;

    assert_eq!(status, 400);
    assert_eq!(
        body,
        json!({"error": true, "errorCode": "6", "errorMessage": "Order not found"})
    );
}

#[actix_web::test]
async fn test_repeated_queries_are_idempotent() {
    let sandbox = BankGatewaySandbox::start();
    let answer = json!({"orderStatus": 1, "orderNumber": "cert_1", "amount": 15000});
    sandbox.script_status(ScriptedResponse::ok(answer.clone()));
    sandbox.script_status(ScriptedResponse::ok(answer));
    let srv = spawn_proxy(&sandbox);

    let payload = TestDataFactory::status_payload(ORDER_ID);
    let (_, first) = query_status(&srv, &payload).await;
    let (_, second) = query_status(&srv, &payload).await;

    assert_eq!(first, second);
    assert_eq!(first["orderStatus"], json!(1));
    assert_eq!(sandbox.calls_to(STATUS_ENDPOINT).len(), 2);
}

#[actix_web::test]
async fn test_status_is_never_cached() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::ok(json!({"orderStatus": 5})));
    sandbox.script_status(ScriptedResponse::ok(json!({"orderStatus": 2})));
    let srv = spawn_proxy(&sandbox);

    let payload = TestDataFactory::status_payload(ORDER_ID);
    let (_, pending) = query_status(&srv, &payload).await;
    let (_, paid) = query_status(&srv, &payload).await;

    assert_eq!(pending, json!({"success": true, "orderStatus": 5}));
    assert_eq!(paid, json!({"success": true, "orderStatus": 2}));
}

#[actix_web::test]
async fn test_transient_gateway_failure_is_retried_for_status() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::with_status(503, json!({})));
    sandbox.script_status(ScriptedResponse::ok(json!({"orderStatus": 2, "amount": 15000})));
    let mut config = sandbox_gateway_config(&sandbox);
    config.status_max_retries = 2;
    let srv = spawn_proxy_with(config, 1000);

    let (status, body) = query_status(&srv, &TestDataFactory::status_payload(ORDER_ID)).await;

    assert_eq!(status, 200);
    assert_eq!(body["orderStatus"], json!(2));
    assert_eq!(sandbox.calls_to(STATUS_ENDPOINT).len(), 2);
}

#[actix_web::test]
async fn test_status_gateway_error_status_is_500() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::with_status(502, json!({"message": "Bad Gateway"})));
    let srv = spawn_proxy(&sandbox);

    let (status, body) = query_status(&srv, &TestDataFactory::status_payload(ORDER_ID)).await;

    assert_eq!(status, 500);
    assert_transport_error(&body);
    assert_eq!(sandbox.calls_to(STATUS_ENDPOINT).len(), 1);
}

#[actix_web::test]
async fn test_status_without_order_status_field_is_500() {
    let sandbox = BankGatewaySandbox::start();
    sandbox.script_status(ScriptedResponse::ok(json!({"orderNumber": "cert_1"})));
    let srv = spawn_proxy(&sandbox);

    let (status, body) = query_status(&srv, &TestDataFactory::status_payload(ORDER_ID)).await;

    assert_eq!(status, 500);
    assert_transport_error(&body);
}
