use crate::core::{AppError, Result};
use std::env;
use std::time::Duration;

pub mod gateway;
pub mod server;

pub use gateway::{GatewayConfig, GatewayCredentials, GatewayEnvironment};
pub use server::ServerConfig;

/// Main application configuration
///
/// Built once at process start and handed to the services that need it.
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub gateway: GatewayConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_format: LogFormat,
    pub order_number_prefix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub rate_limit_per_minute: u32,
    /// Empty means any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup("LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            None | Some("") | Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT: {}",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
                log_format,
                order_number_prefix: lookup("ORDER_NUMBER_PREFIX")
                    .unwrap_or_else(|| "order_".to_string()),
            },
            server: ServerConfig::from_lookup(lookup)?,
            gateway: GatewayConfig::from_lookup(lookup)?,
            security: SecurityConfig {
                rate_limit_per_minute: lookup("RATE_LIMIT_PER_MINUTE")
                    .unwrap_or_else(|| "120".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid RATE_LIMIT_PER_MINUTE".to_string())
                    })?,
                cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(str::trim)
                            .filter(|origin| !origin.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.gateway.timeout == Duration::ZERO {
            return Err(AppError::Configuration(
                "Gateway timeout must be greater than 0".to_string(),
            ));
        }

        if self.security.rate_limit_per_minute == 0 {
            return Err(AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }

        if reqwest::Url::parse(&self.gateway.base_url).is_err() {
            return Err(AppError::Configuration(format!(
                "Invalid gateway base URL: {}",
                self.gateway.base_url
            )));
        }

        if self.app.order_number_prefix.is_empty() {
            return Err(AppError::Configuration(
                "Order number prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
