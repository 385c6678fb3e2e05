//! Application configuration loaded from `civlab.toml`.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Default configuration file name, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "civlab.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Scenario catalog location.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Completion service configuration.
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AppConfig {
    /// Parse configuration from TOML content and validate it.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.catalog.validate()?;
        self.completion.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    /// Path to the scenario catalog YAML, relative to the working directory.
    #[serde(default = "default_catalog_path")]
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.path.as_os_str().is_empty() {
            return Err(AppError::config_error("catalog.path must not be empty"));
        }
        Ok(())
    }
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("config/scenarios.yaml")
}

/// Completion service configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat completion endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::config_error(
                "completion.temperature must be between 0 and 2",
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("completion.timeout_secs must be greater than 0"));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::config_error("completion.api_key_env must not be empty"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4".to_string()
}

fn default_temperature() -> f64 {
    0.6
}

fn default_timeout() -> u64 {
    30
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}
