use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::payments::models::{PaymentCreateRequest, PaymentStatusRequest};
use crate::modules::payments::services::PaymentService;

/// Start a payment at the bank
/// POST /api/payment/register
pub async fn register_payment(
    service: web::Data<PaymentService>,
    request: web::Json<PaymentCreateRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register_payment(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Current gateway state of a registered payment
/// POST /api/payment/status
pub async fn payment_status(
    service: web::Data<PaymentService>,
    request: web::Json<PaymentStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.payment_status(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// Configure payment proxy routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/payment")
            .route("/register", web::post().to(register_payment))
            .route("/status", web::post().to(payment_status)),
    );
}
