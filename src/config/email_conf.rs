use serde::{Deserialize, Serialize};
use std::env;
use tracing::{debug, warn};

use crate::config::ConfigError;

/// SMTP settings for the new-quote notification email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP username for authentication
    pub smtp_username: String,
    /// SMTP password for authentication
    pub smtp_password: String,
    /// Whether to use TLS encryption
    pub use_tls: bool,
    /// From email address
    pub from_email: String,
    /// From name (display name)
    pub from_name: String,
    /// Address the new-quote notification is delivered to
    pub notification_email: String,
    /// Connection timeout in seconds
    pub connection_timeout_secs: u64,
}

impl EmailConfig {
    /// Create EmailConfig from environment variables. Absence of `SMTP_HOST`
    /// means notifications are simply not configured.
    pub fn from_env() -> Result<Self, ConfigError> {
        let smtp_host = env::var("SMTP_HOST")
            .map_err(|_| ConfigError::EnvVarNotFound("SMTP_HOST".to_string()))?;
        debug!("SMTP host: {}", smtp_host);

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| {
                warn!("SMTP_PORT not set, defaulting to 587");
                "587".to_string()
            })
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("Invalid SMTP_PORT value".to_string()))?;

        let smtp_username = env::var("SMTP_USERNAME").unwrap_or_default();
        let smtp_password = env::var("SMTP_PASSWORD").unwrap_or_default();

        let use_tls = env::var("SMTP_USE_TLS")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .unwrap_or(true);

        let from_email = env::var("SMTP_FROM_EMAIL")
            .map_err(|_| ConfigError::EnvVarNotFound("SMTP_FROM_EMAIL".to_string()))?;

        let from_name =
            env::var("SMTP_FROM_NAME").unwrap_or_else(|_| "22G Roofing".to_string());

        let notification_email = env::var("NOTIFICATION_EMAIL")
            .map_err(|_| ConfigError::EnvVarNotFound("NOTIFICATION_EMAIL".to_string()))?;

        let connection_timeout_secs = env::var("SMTP_CONNECTION_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(10);

        let config = EmailConfig {
            smtp_host,
            smtp_port,
            smtp_username,
            smtp_password,
            use_tls,
            from_email,
            from_name,
            notification_email,
            connection_timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.smtp_host.is_empty() {
            return Err(ConfigError::ValidationError(
                "SMTP host must not be empty".to_string(),
            ));
        }
        if !self.from_email.contains('@') {
            return Err(ConfigError::ValidationError(format!(
                "Invalid from email address: {}",
                self.from_email
            )));
        }
        if !self.notification_email.contains('@') {
            return Err(ConfigError::ValidationError(format!(
                "Invalid notification email address: {}",
                self.notification_email
            )));
        }
        Ok(())
    }
}
