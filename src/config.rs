use std::env;

pub const DEFAULT_DAILY_API_URL: &str = "https://api.daily.co/v1";
pub const DEFAULT_DAILY_DOMAIN: &str = "linkstream.daily.co";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub log_format: LogFormat,
    pub daily: DailyConfig,
}

/// Credentials and endpoints for the Daily.co REST API
#[derive(Debug, Clone)]
pub struct DailyConfig {
    pub api_key: String,
    pub domain: String,
    pub api_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let daily = DailyConfig {
            api_key: env::var("DAILY_API_KEY").unwrap_or_default(),
            domain: env::var("DAILY_DOMAIN").unwrap_or_else(|_| DEFAULT_DAILY_DOMAIN.to_string()),
            api_url: env::var("DAILY_API_URL")
                .unwrap_or_else(|_| DEFAULT_DAILY_API_URL.to_string()),
        };

        if !validate_daily_config(&daily) {
            return Err(ConfigError::MissingApiKey);
        }

        Ok(Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidPort)?,
            log_format: match env::var("LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
            daily,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl DailyConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            domain: DEFAULT_DAILY_DOMAIN.to_string(),
            api_url: DEFAULT_DAILY_API_URL.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }
}

/// Whether room operations can be attempted at all.
pub fn validate_daily_config(config: &DailyConfig) -> bool {
    !config.api_key.trim().is_empty()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid server port")]
    InvalidPort,
    #[error("DAILY_API_KEY environment variable is required")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_not_configured() {
        assert!(!validate_daily_config(&DailyConfig::new("")));
        assert!(!validate_daily_config(&DailyConfig::new("   ")));
        assert!(validate_daily_config(&DailyConfig::new("key-123")));
    }

    #[test]
    fn builder_overrides_endpoints() {
        let config = DailyConfig::new("key")
            .with_api_url("http://127.0.0.1:9999")
            .with_domain("acme.daily.co");

        assert_eq!(config.api_url, "http://127.0.0.1:9999");
        assert_eq!(config.domain, "acme.daily.co");
    }
}
