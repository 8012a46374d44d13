use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;
use tokio::time::Duration;

use crate::external::finnhub::DEFAULT_BASE_URL;
use crate::services::quote_aggregator::AggregatorSettings;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub finnhub_api_key: String,
    pub finnhub_base_url: String,
    /// Exchange code passed to the symbol listing
    pub symbol_exchange: String,
    pub universe_limit: usize,
    /// Default number of ranked instruments returned to clients
    pub display_limit: usize,
    pub quote_timeout: Duration,
    pub quote_max_concurrent: usize,
    pub quote_requests_per_minute: u32,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let finnhub_api_key = std::env::var("FINNHUB_API_KEY")
            .map_err(|_| ConfigError::Missing("FINNHUB_API_KEY"))?;

        let config = Self {
            finnhub_api_key,
            finnhub_base_url: std::env::var("FINNHUB_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            symbol_exchange: std::env::var("SYMBOL_EXCHANGE")
                .unwrap_or_else(|_| "US".to_string()),
            universe_limit: env_or("UNIVERSE_LIMIT", 50)?,
            display_limit: env_or("DISPLAY_LIMIT", 10)?,
            quote_timeout: Duration::from_secs(env_or("QUOTE_TIMEOUT_SECS", 10)?),
            quote_max_concurrent: env_or("QUOTE_MAX_CONCURRENT", 10)?,
            quote_requests_per_minute: env_or("QUOTE_REQUESTS_PER_MINUTE", 300)?,
            bind_addr: env_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let checks: [(&'static str, bool, String); 4] = [
            ("UNIVERSE_LIMIT", self.universe_limit > 0, self.universe_limit.to_string()),
            ("DISPLAY_LIMIT", self.display_limit > 0, self.display_limit.to_string()),
            ("QUOTE_TIMEOUT_SECS", !self.quote_timeout.is_zero(), self.quote_timeout.as_secs().to_string()),
            ("QUOTE_MAX_CONCURRENT", self.quote_max_concurrent > 0, self.quote_max_concurrent.to_string()),
        ];

        for (name, ok, value) in checks {
            if !ok {
                return Err(ConfigError::Invalid { name, value });
            }
        }
        Ok(())
    }

    pub fn aggregator_settings(&self) -> AggregatorSettings {
        AggregatorSettings {
            universe_limit: self.universe_limit,
            request_timeout: self.quote_timeout,
            max_concurrent: self.quote_max_concurrent,
            requests_per_minute: self.quote_requests_per_minute,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = AggregatorSettings::default();
        Self {
            finnhub_api_key: String::new(),
            finnhub_base_url: DEFAULT_BASE_URL.to_string(),
            symbol_exchange: "US".to_string(),
            universe_limit: settings.universe_limit,
            display_limit: 10,
            quote_timeout: settings.request_timeout,
            quote_max_concurrent: settings.max_concurrent,
            quote_requests_per_minute: settings.requests_per_minute,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
        }
    }
}

fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_display_limit_rejected() {
        let config = AppConfig {
            display_limit: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { name: "DISPLAY_LIMIT", .. })
        ));
    }

    #[test]
    fn test_aggregator_settings_follow_config() {
        let config = AppConfig {
            universe_limit: 20,
            quote_requests_per_minute: 0,
            ..AppConfig::default()
        };
        let settings = config.aggregator_settings();
        assert_eq!(settings.universe_limit, 20);
        assert_eq!(settings.requests_per_minute, 0);
    }
}
