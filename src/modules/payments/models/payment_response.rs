use serde::Serialize;

use super::gateway::GatewayStatusResponse;

/// Answer to `POST /api/payment/register`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPaymentResponse {
    pub success: bool,
    pub form_url: String,
    /// Gateway order id, used for later status checks
    pub order_id: String,
    /// Locally generated correlation id
    pub order_number: String,
}

/// Answer to `POST /api/payment/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentStatusResponse {
    pub success: bool,
    #[serde(flatten)]
    pub status: GatewayStatusResponse,
}
