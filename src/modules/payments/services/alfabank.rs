use super::gateway_trait::BankGateway;
use crate::config::{GatewayConfig, GatewayCredentials};
use crate::core::{AppError, Result};
use crate::modules::payments::models::{
    GatewayRegisterResponse, GatewayStatusResponse, RegisterOrder,
};
use async_trait::async_trait;
use reqwest::{Client, Response};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

const REGISTER_PATH: &str = "register.do";
const STATUS_PATH: &str = "getOrderStatusExtended.do";

/// Alfa-Bank REST gateway client
///
/// Talks form-encoded POST to `register.do` and `getOrderStatusExtended.do`
/// and reads JSON back. Registration is sent exactly once; status queries go
/// through a retrying client because they are read-only.
pub struct AlfaBankClient {
    client: Client,
    retrying_client: ClientWithMiddleware,
    base_url: String,
    credentials: GatewayCredentials,
}

impl AlfaBankClient {
    /// Create a new client from gateway settings
    ///
    /// Both underlying clients share the configured request timeout.
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout.min(Duration::from_secs(10)))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        let retry_policy = ExponentialBackoff::builder()
            .retry_bounds(Duration::from_millis(200), Duration::from_secs(5))
            .build_with_max_retries(config.status_max_retries);

        let retrying_client = ClientBuilder::new(client.clone())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            retrying_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials: config.credentials.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn with_credentials(&self, mut fields: Vec<(&'static str, String)>) -> Vec<(&'static str, String)> {
        fields.extend(self.credentials.form_fields());
        fields
    }
}

#[async_trait]
impl BankGateway for AlfaBankClient {
    async fn register_order(&self, order: &RegisterOrder) -> Result<GatewayRegisterResponse> {
        let form = self.with_credentials(order.form_fields());

        tracing::info!(
            order_number = %order.order_number,
            amount_minor = order.amount_minor,
            "Registering order with bank gateway"
        );

        let response = self
            .client
            .post(self.endpoint(REGISTER_PATH))
            .form(&form)
            .send()
            .await
            .map_err(|e| transport_error(REGISTER_PATH, &e))?;

        let body = read_gateway_body(response, REGISTER_PATH).await?;
        decode(body, REGISTER_PATH)
    }

    async fn query_order_status(&self, order_id: &str) -> Result<GatewayStatusResponse> {
        let form = self.with_credentials(vec![("orderId", order_id.to_string())]);

        tracing::debug!(order_id = %order_id, "Querying order status");

        let response = self
            .retrying_client
            .post(self.endpoint(STATUS_PATH))
            .form(&form)
            .send()
            .await
            .map_err(|e| match e {
                reqwest_middleware::Error::Reqwest(e) => transport_error(STATUS_PATH, &e),
                reqwest_middleware::Error::Middleware(e) => AppError::gateway_transport(
                    "Payment gateway request failed",
                    format!("{}: {:#}", STATUS_PATH, e),
                ),
            })?;

        let body = read_gateway_body(response, STATUS_PATH).await?;
        log_dropped_fields(&body, order_id);
        decode(body, STATUS_PATH)
    }

    fn name(&self) -> &str {
        "alfabank"
    }
}

fn transport_error(operation: &str, e: &reqwest::Error) -> AppError {
    let message = if e.is_timeout() {
        "Payment gateway timed out"
    } else if e.is_connect() {
        "Payment gateway unavailable"
    } else {
        "Payment gateway request failed"
    };
    AppError::gateway_transport(message, format!("{}: {}", operation, e))
}

/// Reads the body, rejecting non-2xx statuses and non-JSON payloads, then
/// splits off in-body business errors.
async fn read_gateway_body(response: Response, operation: &str) -> Result<Value> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| transport_error(operation, &e))?;

    if !status.is_success() {
        return Err(AppError::gateway_transport(
            format!("Payment gateway returned HTTP {}", status.as_u16()),
            format!("{} failed with HTTP {}: {}", operation, status.as_u16(), body),
        ));
    }

    let value: Value = serde_json::from_str(&body).map_err(|e| {
        AppError::gateway_transport(
            "Invalid response from payment gateway",
            format!("{}: {} (body: {})", operation, e, body),
        )
    })?;

    if let Some(err) = business_error(&value) {
        return Err(err);
    }

    Ok(value)
}

/// `errorCode` absent, empty or `"0"` means success
fn business_error(body: &Value) -> Option<AppError> {
    let code = match body.get("errorCode")? {
        Value::String(code) => code.trim().to_string(),
        Value::Number(code) => code.to_string(),
        Value::Null => return None,
        other => other.to_string(),
    };

    if code.is_empty() || code == "0" {
        return None;
    }

    let message = body
        .get("errorMessage")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Some(AppError::gateway_business(code, message))
}

fn decode<T: DeserializeOwned>(body: Value, operation: &str) -> Result<T> {
    let rendered = body.to_string();
    serde_json::from_value(body).map_err(|e| {
        AppError::gateway_transport(
            "Unexpected response from payment gateway",
            format!("{}: {} (body: {})", operation, e, rendered),
        )
    })
}

fn log_dropped_fields(body: &Value, order_id: &str) {
    let Some(fields) = body.as_object() else {
        return;
    };

    let dropped: Vec<&str> = fields
        .keys()
        .map(String::as_str)
        .filter(|key| {
            !GatewayStatusResponse::FORWARDED_FIELDS.contains(key)
                && !matches!(*key, "errorCode" | "errorMessage")
        })
        .collect();

    if !dropped.is_empty() {
        tracing::debug!(order_id = %order_id, ?dropped, "Dropping unlisted gateway status fields");
    }
}
