use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::WorkspaceStore;

/// In-memory workspace store for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspaceStore {
    // Arc<Mutex> so clones share the same files
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
}

impl MemoryWorkspaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl WorkspaceStore for MemoryWorkspaceStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let files = self.files.lock().unwrap();
        files.get(&PathBuf::from(path)).cloned().ok_or_else(|| {
            AppError::from(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path),
            ))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(PathBuf::from(path), content.to_string());
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.lock().unwrap().contains_key(&PathBuf::from(path))
    }
}
