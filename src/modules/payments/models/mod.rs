pub mod gateway;
pub mod payment_request;
pub mod payment_response;

pub use gateway::{GatewayRegisterResponse, GatewayStatusResponse, OrderStatus, RegisterOrder};
pub use payment_request::{PaymentCreateRequest, PaymentStatusRequest, ValidatedPayment};
pub use payment_response::{PaymentStatusResponse, RegisterPaymentResponse};
