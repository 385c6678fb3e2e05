use crate::domain::{AppConfig, AppError, ScenarioCatalog};
use crate::ports::WorkspaceStore;

use super::config::{load_catalog, load_config};

/// Application context holding dependencies for command execution.
pub struct AppContext<W: WorkspaceStore> {
    workspace: W,
    config: AppConfig,
}

impl<W: WorkspaceStore> AppContext<W> {
    /// Create a new application context.
    pub fn new(workspace: W, config: AppConfig) -> Self {
        Self { workspace, config }
    }

    /// Create a context, reading configuration from the workspace.
    pub fn load(workspace: W, config_path: Option<&str>) -> Result<Self, AppError> {
        let config = load_config(&workspace, config_path)?;
        Ok(Self::new(workspace, config))
    }

    /// Get a reference to the workspace store.
    pub fn workspace(&self) -> &W {
        &self.workspace
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the scenario catalog named by the configuration.
    pub fn catalog(&self) -> Result<ScenarioCatalog, AppError> {
        load_catalog(&self.workspace, &self.config)
    }
}
