//! `init`: write the default configuration and scenario catalog.

use crate::adapters::assets::{INIT_FILES, read_asset};
use crate::domain::AppError;
use crate::ports::WorkspaceStore;

/// Write the embedded `civlab.toml` and `config/scenarios.yaml`.
///
/// Nothing is written when any destination already exists. Returns the created paths.
pub fn execute(workspace: &impl WorkspaceStore) -> Result<Vec<String>, AppError> {
    if let Some((_, existing)) = INIT_FILES.iter().find(|(_, dest)| workspace.file_exists(dest)) {
        return Err(AppError::AlreadyInitialized(existing.to_string()));
    }

    let mut created = Vec::new();
    for (asset, dest) in INIT_FILES {
        let content = read_asset(asset).ok_or_else(|| {
            AppError::config_error(format!("Embedded asset missing: {}", asset))
        })?;
        workspace.write_file(dest, &content)?;
        tracing::debug!(path = dest, "Wrote init file");
        created.push(dest.to_string());
    }
    Ok(created)
}
