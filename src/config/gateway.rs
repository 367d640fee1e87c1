use crate::core::{AppError, Result};
use std::fmt;
use std::time::Duration;

pub const TEST_BASE_URL: &str = "https://alfa.rbsuat.com/payment/rest";
pub const PRODUCTION_BASE_URL: &str = "https://payment.alfabank.ru/payment/rest";

/// Deployment mode selecting the gateway endpoint set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayEnvironment {
    Test,
    Production,
}

impl GatewayEnvironment {
    pub fn default_base_url(&self) -> &'static str {
        match self {
            GatewayEnvironment::Test => TEST_BASE_URL,
            GatewayEnvironment::Production => PRODUCTION_BASE_URL,
        }
    }
}

impl fmt::Display for GatewayEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayEnvironment::Test => write!(f, "test"),
            GatewayEnvironment::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for GatewayEnvironment {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "test" | "sandbox" | "development" => Ok(GatewayEnvironment::Test),
            "production" | "prod" => Ok(GatewayEnvironment::Production),
            _ => Err(format!("Invalid payment mode: {}", s)),
        }
    }
}

/// Merchant credentials accepted by the gateway
#[derive(Clone, PartialEq, Eq)]
pub enum GatewayCredentials {
    /// Merchant token issued by the bank
    Token(String),
    /// Operator login and password
    Operator { username: String, password: String },
}

impl GatewayCredentials {
    /// Form fields carrying the credentials on every gateway call
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        match self {
            GatewayCredentials::Token(token) => vec![("token", token.clone())],
            GatewayCredentials::Operator { username, password } => vec![
                ("userName", username.clone()),
                ("password", password.clone()),
            ],
        }
    }
}

impl fmt::Debug for GatewayCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayCredentials::Token(_) => f.write_str("Token(***)"),
            GatewayCredentials::Operator { username, .. } => f
                .debug_struct("Operator")
                .field("username", username)
                .field("password", &"***")
                .finish(),
        }
    }
}

/// Bank gateway connection settings
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub environment: GatewayEnvironment,
    pub base_url: String,
    pub credentials: GatewayCredentials,
    pub timeout: Duration,
    pub status_max_retries: u32,
}

impl GatewayConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment: GatewayEnvironment = lookup("PAYMENT_MODE")
            .unwrap_or_else(|| "test".to_string())
            .parse()
            .map_err(AppError::Configuration)?;

        let base_url = lookup("GATEWAY_BASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| environment.default_base_url().to_string());

        let token = lookup("GATEWAY_TOKEN").filter(|t| !t.is_empty());
        let username = lookup("GATEWAY_USERNAME").filter(|u| !u.is_empty());
        let password = lookup("GATEWAY_PASSWORD").filter(|p| !p.is_empty());

        let credentials = match (token, username, password) {
            (Some(token), _, _) => GatewayCredentials::Token(token),
            (None, Some(username), Some(password)) => {
                GatewayCredentials::Operator { username, password }
            }
            _ => {
                return Err(AppError::Configuration(
                    "GATEWAY_TOKEN or GATEWAY_USERNAME/GATEWAY_PASSWORD must be set".to_string(),
                ))
            }
        };

        let timeout_secs: u64 = lookup("GATEWAY_TIMEOUT_SECS")
            .unwrap_or_else(|| "30".to_string())
            .parse()
            .map_err(|_| AppError::Configuration("Invalid GATEWAY_TIMEOUT_SECS".to_string()))?;

        let status_max_retries: u32 = lookup("STATUS_QUERY_MAX_RETRIES")
            .unwrap_or_else(|| "2".to_string())
            .parse()
            .map_err(|_| {
                AppError::Configuration("Invalid STATUS_QUERY_MAX_RETRIES".to_string())
            })?;

        Ok(GatewayConfig {
            environment,
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            timeout: Duration::from_secs(timeout_secs),
            status_max_retries,
        })
    }
}
