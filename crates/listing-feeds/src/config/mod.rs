use crate::feeds::Vendor;
use std::env;
use std::fmt;

/// Top-level configuration for feed normalization runs.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    pub feeds: FeedSettings,
    pub telemetry: TelemetryConfig,
}

impl FeedConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let default_vendor = match env::var("FEED_DEFAULT_VENDOR") {
            Ok(value) if !value.trim().is_empty() => Some(
                value
                    .parse::<Vendor>()
                    .map_err(|_| ConfigError::UnknownVendor { value })?,
            ),
            _ => None,
        };

        let strict = match env::var("FEED_STRICT") {
            Ok(value) => parse_flag(&value).ok_or(ConfigError::InvalidStrict { value })?,
            Err(_) => false,
        };

        let log_level = env::var("FEED_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            feeds: FeedSettings {
                default_vendor,
                strict,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Feed selection and acceptance rules.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    /// Vendor used when a run does not name one.
    pub default_vendor: Option<Vendor>,
    /// Reject records that needed any default substitution.
    pub strict: bool,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    UnknownVendor { value: String },
    InvalidStrict { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownVendor { value } => write!(
                f,
                "FEED_DEFAULT_VENDOR '{}' does not name a registered feed vendor",
                value
            ),
            ConfigError::InvalidStrict { value } => {
                write!(f, "FEED_STRICT must be true or false, got '{}'", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
