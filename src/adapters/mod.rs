pub mod assets;
pub mod completion_http;
pub mod memory_workspace_store;
pub mod workspace_filesystem;
