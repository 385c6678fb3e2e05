use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::WorkspaceStore;

/// Filesystem-based workspace store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemWorkspaceStore {
    root: PathBuf,
}

impl FilesystemWorkspaceStore {
    /// Create a workspace store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

impl WorkspaceStore for FilesystemWorkspaceStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full = self.resolve(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&full, content)?;
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }
}
