//! Configuration management for the Rainfall Advisor
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code (plus `PORT` and `GEMINI_API_KEY` if set)
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with RFA__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Text-generation model configuration
    pub gemini: GeminiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,

    /// Directory with the static front-end, served for unmatched paths
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: String,

    /// Model name, e.g. gemini-2.5-flash
    pub model: String,

    /// API base URL (overridable for testing)
    pub base_url: String,

    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("RFA_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let mut builder = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("gemini.model", "gemini-2.5-flash")?
            .set_default(
                "gemini.base_url",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("gemini.timeout_secs", 60)?;

        // Conventional variables used by hosting platforms and Google AI Studio docs
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_default("server.port", port)?;
        }
        if let Ok(api_key) = std::env::var("GEMINI_API_KEY") {
            builder = builder.set_default("gemini.api_key", api_key)?;
        }

        let config: Config = builder
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (RFA__ prefix)
            .add_source(
                Environment::with_prefix("RFA")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the server cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gemini.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "gemini.api_key is empty; set GEMINI_API_KEY (get one from Google AI Studio)"
                    .to_string(),
            ));
        }
        if self.gemini.model.trim().is_empty() {
            return Err(ConfigError::Message("gemini.model must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(api_key: &str) -> Config {
        Config {
            environment: "test".to_string(),
            server: ServerConfig::default(),
            gemini: GeminiConfig {
                api_key: api_key.to_string(),
                model: "gemini-2.5-flash".to_string(),
                base_url: "http://localhost:9".to_string(),
                timeout_secs: 5,
            },
        }
    }

    #[test]
    fn test_validate_accepts_api_key() {
        assert!(config_with_key("AIza-test-key").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_api_key() {
        assert!(config_with_key("").validate().is_err());
        assert!(config_with_key("   ").validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_model() {
        let mut config = config_with_key("AIza-test-key");
        config.gemini.model = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.port, 3000);
        assert_eq!(server.host, "0.0.0.0");
        assert!(server.static_dir.is_none());
    }
}
