//! Application configuration loading.

use crate::domain::{AppConfig, AppError, CONFIG_FILE};
use crate::ports::WorkspaceStore;

/// Load `civlab.toml`.
///
/// With no explicit path, a missing default file yields the built-in defaults.
/// An explicitly requested file must exist.
pub fn load_config(
    workspace: &impl WorkspaceStore,
    explicit_path: Option<&str>,
) -> Result<AppConfig, AppError> {
    let path = explicit_path.unwrap_or(CONFIG_FILE);

    if !workspace.file_exists(path) {
        if explicit_path.is_some() {
            return Err(AppError::config_error(format!("Config file not found: {}", path)));
        }
        tracing::debug!(path, "No config file, using defaults");
        return Ok(AppConfig::default());
    }

    let content = workspace.read_file(path)?;
    let config = AppConfig::parse_toml(&content)?;
    tracing::debug!(path, model = %config.completion.model, "Loaded configuration");
    Ok(config)
}
