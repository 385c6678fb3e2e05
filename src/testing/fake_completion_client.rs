use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::{CompletionClient, CompletionRequest};

/// Completion client that records requests and replays a fixed outcome.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub received: Arc<Mutex<Vec<CompletionRequest>>>,
    reply: Arc<Mutex<Result<String, AppError>>>,
}

impl FakeCompletionClient {
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_reply(Ok(text.into()))
    }

    pub fn failing(error: AppError) -> Self {
        Self::with_reply(Err(error))
    }

    fn with_reply(reply: Result<String, AppError>) -> Self {
        Self { received: Arc::new(Mutex::new(vec![])), reply: Arc::new(Mutex::new(reply)) }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.received.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        self.received.lock().unwrap().push(request.clone());
        match &*self.reply.lock().unwrap() {
            Ok(text) => Ok(text.clone()),
            Err(err) => Err(replay(err)),
        }
    }
}

// AppError holds io::Error and is not Clone; rebuild the variants tests use.
fn replay(err: &AppError) -> AppError {
    match err {
        AppError::CompletionApiError { message, status } => {
            AppError::CompletionApiError { message: message.clone(), status: *status }
        }
        AppError::EnvironmentVariableMissing(name) => {
            AppError::EnvironmentVariableMissing(name.clone())
        }
        AppError::MalformedCompletion(msg) => AppError::MalformedCompletion(msg.clone()),
        AppError::EmptyCompletion => AppError::EmptyCompletion,
        other => AppError::CompletionApiError { message: other.to_string(), status: None },
    }
}
