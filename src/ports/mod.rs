mod completion_client;
mod workspace_store;

pub use completion_client::{CompletionClient, CompletionRequest, MockCompletionClient};
pub use workspace_store::WorkspaceStore;
