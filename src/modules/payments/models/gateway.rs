use serde::{Deserialize, Serialize};
use std::fmt;

/// Order registration parameters sent to the bank gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOrder {
    pub order_number: String,
    /// Amount in minor units (kopecks)
    pub amount_minor: i64,
    pub return_url: String,
    pub fail_url: String,
    pub description: String,
}

impl RegisterOrder {
    /// Form fields for `register.do`, credentials excluded
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("orderNumber", self.order_number.clone()),
            ("amount", self.amount_minor.to_string()),
            ("returnUrl", self.return_url.clone()),
            ("failUrl", self.fail_url.clone()),
            ("description", self.description.clone()),
        ]
    }
}

/// Successful answer of `register.do`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayRegisterResponse {
    /// Gateway-assigned order id
    pub order_id: String,
    /// Payment page the payer is redirected to
    pub form_url: String,
}

/// Order state as reported by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum OrderStatus {
    /// 0: registered, not paid
    Registered,
    /// 1: amount held (two-stage payment)
    PreAuthorized,
    /// 2: fully authorized
    Authorized,
    /// 3: authorization cancelled
    Reversed,
    /// 4: refunded
    Refunded,
    /// 5: waiting for issuer ACS authorization
    AcsPending,
    /// 6: authorization declined
    Declined,
    /// Code outside the documented range, forwarded as-is
    Unknown(i32),
}

impl OrderStatus {
    pub fn code(&self) -> i32 {
        match self {
            OrderStatus::Registered => 0,
            OrderStatus::PreAuthorized => 1,
            OrderStatus::Authorized => 2,
            OrderStatus::Reversed => 3,
            OrderStatus::Refunded => 4,
            OrderStatus::AcsPending => 5,
            OrderStatus::Declined => 6,
            OrderStatus::Unknown(code) => *code,
        }
    }

    /// Only a fully authorized order counts as paid
    pub fn is_paid(&self) -> bool {
        matches!(self, OrderStatus::Authorized)
    }
}

impl From<i32> for OrderStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => OrderStatus::Registered,
            1 => OrderStatus::PreAuthorized,
            2 => OrderStatus::Authorized,
            3 => OrderStatus::Reversed,
            4 => OrderStatus::Refunded,
            5 => OrderStatus::AcsPending,
            6 => OrderStatus::Declined,
            other => OrderStatus::Unknown(other),
        }
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Registered => "registered",
            OrderStatus::PreAuthorized => "pre_authorized",
            OrderStatus::Authorized => "authorized",
            OrderStatus::Reversed => "reversed",
            OrderStatus::Refunded => "refunded",
            OrderStatus::AcsPending => "acs_pending",
            OrderStatus::Declined => "declined",
            OrderStatus::Unknown(_) => "unknown",
        };
        write!(f, "{}({})", name, self.code())
    }
}

/// Fields of `getOrderStatusExtended.do` forwarded to the browser.
///
/// Anything the gateway sends beyond these is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayStatusResponse {
    pub order_status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    /// Minor units
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_code_description: Option<String>,
    /// Registration time, unix millis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_date_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

impl GatewayStatusResponse {
    pub const FORWARDED_FIELDS: &'static [&'static str] = &[
        "orderStatus",
        "orderNumber",
        "amount",
        "currency",
        "actionCode",
        "actionCodeDescription",
        "date",
        "authDateTime",
        "orderDescription",
        "ip",
    ];
}
