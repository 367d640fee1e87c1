use actix_web::web;

use crate::middleware::json_error_handler;

pub mod health;
pub mod payments;

/// Register every route and the shared JSON extractor settings
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .limit(16 * 1024)
            .error_handler(json_error_handler),
    )
    .configure(health::configure)
    .configure(payments::configure);
}
