use std::sync::Arc;

use tracing::{error, info, warn};

use super::gateway_trait::BankGateway;
use super::order_number::OrderNumberGenerator;
use crate::core::{AppError, Currency, Result};
use crate::modules::payments::models::{
    PaymentCreateRequest, PaymentStatusRequest, PaymentStatusResponse, RegisterOrder,
    RegisterPaymentResponse,
};

/// Translates browser payment requests into gateway calls
pub struct PaymentService {
    gateway: Arc<dyn BankGateway>,
    order_numbers: OrderNumberGenerator,
    currency: Currency,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn BankGateway>, order_numbers: OrderNumberGenerator) -> Self {
        Self {
            gateway,
            order_numbers,
            currency: Currency::RUB,
        }
    }

    pub fn order_numbers(&self) -> &OrderNumberGenerator {
        &self.order_numbers
    }

    /// Validate, assign an order number and register the order once.
    ///
    /// Gateway failures are not retried here: a blind retry could create a
    /// second order at the bank.
    pub async fn register_payment(
        &self,
        request: PaymentCreateRequest,
    ) -> Result<RegisterPaymentResponse> {
        let payment = request.validate()?;
        let amount_minor = self
            .currency
            .to_minor_units(payment.amount)
            .map_err(AppError::Validation)?;

        let order = RegisterOrder {
            order_number: self.order_numbers.generate(),
            amount_minor,
            return_url: payment.return_url,
            fail_url: payment.fail_url,
            description: payment.description,
        };

        match self.gateway.register_order(&order).await {
            Ok(registered) => {
                info!(
                    gateway = %self.gateway.name(),
                    order_number = %order.order_number,
                    order_id = %registered.order_id,
                    "Payment registered"
                );
                Ok(RegisterPaymentResponse {
                    success: true,
                    form_url: registered.form_url,
                    order_id: registered.order_id,
                    order_number: order.order_number,
                })
            }
            Err(e @ AppError::GatewayBusiness { .. }) => {
                warn!(
                    gateway = %self.gateway.name(),
                    order_number = %order.order_number,
                    error = %e,
                    "Gateway declined payment registration"
                );
                Err(e)
            }
            Err(e) => {
                error!(
                    gateway = %self.gateway.name(),
                    order_number = %order.order_number,
                    error = %e,
                    "Failed to register payment"
                );
                Err(e)
            }
        }
    }

    /// Relay the gateway's current view of an order
    pub async fn payment_status(
        &self,
        request: PaymentStatusRequest,
    ) -> Result<PaymentStatusResponse> {
        let order_id = request.validate()?;

        match self.gateway.query_order_status(&order_id).await {
            Ok(status) => {
                info!(
                    gateway = %self.gateway.name(),
                    order_id = %order_id,
                    order_status = %status.order_status,
                    paid = status.order_status.is_paid(),
                    "Payment status fetched"
                );
                Ok(PaymentStatusResponse {
                    success: true,
                    status,
                })
            }
            Err(e @ AppError::GatewayBusiness { .. }) => {
                warn!(
                    gateway = %self.gateway.name(),
                    order_id = %order_id,
                    error = %e,
                    "Gateway declined payment status query"
                );
                Err(e)
            }
            Err(e) => {
                error!(
                    gateway = %self.gateway.name(),
                    order_id = %order_id,
                    error = %e,
                    "Failed to fetch payment status"
                );
                Err(e)
            }
        }
    }
}
