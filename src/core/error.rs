use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every variant is converted to a structured JSON body at the handler
/// boundary; nothing below this type ever reaches the browser raw.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Required field missing or malformed on the inbound request
    #[error("Validation error: {0}")]
    Validation(String),

    /// Gateway answered 2xx but reported a domain error code in the body
    #[error("Gateway business error [{error_code}]: {error_message}")]
    GatewayBusiness {
        error_code: String,
        error_message: String,
    },

    /// Network failure, timeout, non-2xx status or unreadable gateway body
    #[error("{message}: {details}")]
    GatewayTransport { message: String, details: String },

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        let body = match self {
            AppError::Validation(message) | AppError::RateLimitExceeded(message) => json!({
                "error": true,
                "message": message,
            }),
            AppError::GatewayBusiness {
                error_code,
                error_message,
            } => json!({
                "error": true,
                "errorCode": error_code,
                "errorMessage": error_message,
            }),
            AppError::GatewayTransport { message, details } => json!({
                "error": true,
                "message": message,
                "details": details,
            }),
            AppError::Configuration(details) | AppError::Internal(details) => {
                tracing::error!(error = %self, "Unexpected error while handling request");
                json!({
                    "error": true,
                    "message": "Internal server error",
                    "details": details,
                })
            }
        };

        HttpResponse::build(status_code).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::GatewayBusiness { .. } => StatusCode::BAD_REQUEST,
            AppError::GatewayTransport { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RateLimitExceeded(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn gateway_business(code: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::GatewayBusiness {
            error_code: code.into(),
            error_message: message.into(),
        }
    }

    pub fn gateway_transport(message: impl Into<String>, details: impl Into<String>) -> Self {
        AppError::GatewayTransport {
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
