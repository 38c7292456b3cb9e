//! Configuration types and loading

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Instance-specific settings
    pub instance: InstanceConfig,

    /// Engine behavior settings
    pub engine: EngineConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InstanceConfig {
    /// Application title
    pub app_title: String,
    /// ISO 4217 currency code used when rendering monetary figures
    pub currency: String,
    /// Time zone
    pub timezone: String,
    /// Date format
    pub date_format: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Whether the consistency pass locks tasks past their end date
    pub auto_lock_overdue_tasks: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            auto_lock_overdue_tasks: true,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            instance: InstanceConfig {
                app_title: "PSA".to_string(),
                currency: "USD".to_string(),
                timezone: "UTC".to_string(),
                date_format: "%Y-%m-%d".to_string(),
            },
            engine: EngineConfig::default(),
        }
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not set: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(title) = std::env::var("PSA_APP_TITLE") {
            config.instance.app_title = title;
        }
        if let Ok(currency) = std::env::var("PSA_CURRENCY") {
            config.instance.currency = currency;
        }
        if let Ok(tz) = std::env::var("TZ") {
            config.instance.timezone = tz;
        }
        if let Ok(fmt) = std::env::var("PSA_DATE_FORMAT") {
            config.instance.date_format = fmt;
        }

        let parse_bool = |v: String| v == "true" || v == "1" || v == "yes";

        if let Ok(v) = std::env::var("PSA_AUTO_LOCK_OVERDUE_TASKS") {
            config.engine.auto_lock_overdue_tasks = parse_bool(v);
        }

        Ok(config)
    }
}
