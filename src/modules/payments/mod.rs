pub mod controllers;
pub mod models;
pub mod services;

pub use controllers::configure;
pub use models::{
    GatewayRegisterResponse, GatewayStatusResponse, OrderStatus, PaymentCreateRequest,
    PaymentStatusRequest, PaymentStatusResponse, RegisterOrder, RegisterPaymentResponse,
};
pub use services::{AlfaBankClient, BankGateway, OrderNumberGenerator, PaymentService};
