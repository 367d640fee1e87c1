pub mod alfabank;
pub mod gateway_trait;
pub mod order_number;
pub mod payment_service;

pub use alfabank::AlfaBankClient;
pub use gateway_trait::BankGateway;
pub use order_number::OrderNumberGenerator;
pub use payment_service::PaymentService;
