use reqwest::Url;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Browser request to start a payment
///
/// Every field is optional on the wire so that missing fields are reported
/// together rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreateRequest {
    /// Amount in major units (rubles)
    pub amount: Option<Decimal>,
    pub return_url: Option<String>,
    pub fail_url: Option<String>,
    pub description: Option<String>,
}

/// A create request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedPayment {
    pub amount: Decimal,
    pub return_url: String,
    pub fail_url: String,
    pub description: String,
}

impl PaymentCreateRequest {
    pub fn validate(self) -> Result<ValidatedPayment> {
        let return_url = non_blank(self.return_url);
        let fail_url = non_blank(self.fail_url);
        let description = non_blank(self.description);

        let missing: Vec<&str> = [
            ("amount", self.amount.is_none()),
            ("returnUrl", return_url.is_none()),
            ("failUrl", fail_url.is_none()),
            ("description", description.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, absent)| absent.then_some(name))
        .collect();

        match (self.amount, return_url, fail_url, description) {
            (Some(amount), Some(return_url), Some(fail_url), Some(description)) => {
                if amount <= Decimal::ZERO {
                    return Err(AppError::validation("amount must be greater than 0"));
                }
                require_absolute_url("returnUrl", &return_url)?;
                require_absolute_url("failUrl", &fail_url)?;

                Ok(ValidatedPayment {
                    amount,
                    return_url,
                    fail_url,
                    description,
                })
            }
            _ => Err(AppError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            ))),
        }
    }
}

/// Browser request to check a previously registered payment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusRequest {
    /// Gateway-assigned order id returned by registration
    pub order_id: Option<String>,
}

impl PaymentStatusRequest {
    pub fn validate(self) -> Result<String> {
        non_blank(self.order_id)
            .ok_or_else(|| AppError::validation("Missing required field: orderId"))
    }
}

/// Whitespace-only counts as missing; accepted values are kept as sent
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn require_absolute_url(field: &str, value: &str) -> Result<()> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        _ => Err(AppError::validation(format!(
            "{} must be an absolute http(s) URL",
            field
        ))),
    }
}
