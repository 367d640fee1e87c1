use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use clinic_pay::config::{Config, LogFormat};
use clinic_pay::middleware::{cors, ErrorHandler, RateLimiter, RequestId};
use clinic_pay::payments::{AlfaBankClient, OrderNumberGenerator, PaymentService};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()?;
    config.validate()?;

    init_tracing(&config);

    tracing::info!("Starting clinic payment proxy");
    tracing::info!("Payment mode: {}", config.gateway.environment);
    tracing::info!("Gateway base URL: {}", config.gateway.base_url);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    let gateway = Arc::new(AlfaBankClient::new(&config.gateway)?);
    let payment_service = web::Data::new(PaymentService::new(
        gateway,
        OrderNumberGenerator::new(config.app.order_number_prefix.clone()),
    ));
    let rate_limiter = RateLimiter::new(config.security.rate_limit_per_minute)?;
    let allowed_origins = config.security.cors_allowed_origins.clone();

    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(ErrorHandler)
            .wrap(rate_limiter.clone())
            .wrap(cors(&allowed_origins))
            .wrap(RequestId)
            .app_data(payment_service.clone())
            .configure(clinic_pay::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/payment/register");
    tracing::info!("  POST /api/payment/status");

    server.await?;
    Ok(())
}

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("clinic_pay={},actix_web=info", config.app.log_level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.app.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
