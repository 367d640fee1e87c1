use async_trait::async_trait;

use crate::core::Result;
use crate::modules::payments::models::{GatewayRegisterResponse, GatewayStatusResponse, RegisterOrder};

/// Bank payment gateway seen from the proxy
///
/// Implementations classify every outcome as success,
/// `AppError::GatewayBusiness` or `AppError::GatewayTransport`.
#[async_trait]
pub trait BankGateway: Send + Sync {
    /// Register a new order and obtain the payer-facing form URL
    async fn register_order(&self, order: &RegisterOrder) -> Result<GatewayRegisterResponse>;

    /// Fetch the current order state. Never cached.
    async fn query_order_status(&self, order_id: &str) -> Result<GatewayStatusResponse>;

    /// Get gateway name
    fn name(&self) -> &str;
}
