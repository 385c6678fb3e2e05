use std::io;

use thiserror::Error;

use crate::domain::scenario::CatalogError;

/// Library-wide error type for civlab operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Application configuration is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Scenario catalog could not be loaded.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Scenario catalog file missing.
    #[error("Scenario catalog not found: {0}. Run 'civlab init' first.")]
    CatalogMissing(String),

    /// A file that `init` would create already exists.
    #[error("Refusing to overwrite existing file: {0}")]
    AlreadyInitialized(String),

    /// Requested scenario is not in the catalog.
    #[error("Scenario '{name}' not found. Available: {available}")]
    ScenarioNotFound { name: String, available: String },

    /// Lever name is not declared by the scenario.
    #[error("Scenario '{scenario}' has no lever named '{lever}'")]
    UnknownLever { scenario: String, lever: String },

    /// Lever value falls outside its declared bounds.
    #[error("Lever '{lever}' value {value} is outside [{min}, {max}]")]
    LeverOutOfRange { lever: String, value: f64, min: f64, max: f64 },

    /// Lever assignment on the command line could not be parsed.
    #[error("Invalid lever assignment '{0}': expected NAME=VALUE")]
    InvalidLeverAssignment(String),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Completion API returned an error or could not be reached.
    #[error("Completion API error: {message}")]
    CompletionApiError { message: String, status: Option<u16> },

    /// Completion API response body did not have the expected shape.
    #[error("Malformed completion response: {0}")]
    MalformedCompletion(String),

    /// Completion API response contained no text.
    #[error("Completion response contained no text")]
    EmptyCompletion,

    /// Prompt template could not be rendered.
    #[error("Prompt rendering failed: {0}")]
    PromptRender(String),

    /// Report text could not be parsed back.
    #[error("Failed to parse report: {0}")]
    ReportParse(String),

    /// Interactive prompt failed.
    #[error("Interactive prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfig(message.into())
    }

    /// Whether this error came from feedback generation rather than the simulation itself.
    pub fn is_feedback_failure(&self) -> bool {
        matches!(
            self,
            AppError::EnvironmentVariableMissing(_)
                | AppError::CompletionApiError { .. }
                | AppError::MalformedCompletion(_)
                | AppError::EmptyCompletion
                | AppError::PromptRender(_)
        )
    }
}
