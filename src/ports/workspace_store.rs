//! Port for reading and writing files relative to the working directory.

use crate::domain::AppError;

pub trait WorkspaceStore {
    /// Read a UTF-8 file.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    fn file_exists(&self, path: &str) -> bool;
}
