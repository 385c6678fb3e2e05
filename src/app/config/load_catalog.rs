//! Scenario catalog loading.

use crate::domain::{AppConfig, AppError, ScenarioCatalog};
use crate::ports::WorkspaceStore;

/// Load and validate the scenario catalog named by `config`.
///
/// Any failure is fatal for the caller; no partial catalog is returned.
pub fn load_catalog(
    workspace: &impl WorkspaceStore,
    config: &AppConfig,
) -> Result<ScenarioCatalog, AppError> {
    let path = config.catalog.path.to_string_lossy();

    if !workspace.file_exists(&path) {
        return Err(AppError::CatalogMissing(path.into_owned()));
    }

    let content = workspace.read_file(&path)?;
    let catalog = ScenarioCatalog::parse_yaml(&content)?;
    tracing::info!(path = %path, scenarios = catalog.scenarios().len(), "Loaded scenario catalog");
    Ok(catalog)
}
