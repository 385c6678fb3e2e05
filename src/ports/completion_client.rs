//! Completion service port definition.

use crate::domain::AppError;

/// A single chat-completion request carrying one user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Content of the single user-role message.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Port for text completion operations.
pub trait CompletionClient {
    /// Send the request and return the text of the first completion, unmodified.
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}

impl<C: CompletionClient + ?Sized> CompletionClient for Box<C> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        (**self).complete(request)
    }
}

/// Offline client returning a canned narrative without network access.
#[derive(Debug, Clone, Default)]
pub struct MockCompletionClient;

impl CompletionClient for MockCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        tracing::info!(
            model = %request.model,
            prompt_chars = request.prompt.len(),
            "Mock completion requested"
        );
        Ok(format!(
            "[mock {}] Raising growth through stimulus tends to push prices up, while tighter \
             rates cool inflation at the cost of output. Wage floors and corporate taxes shift \
             how gains are shared, which moves inequality. Weigh who carries the burden of \
             higher prices against who benefits from faster growth. Equity depends on whether \
             the least advantaged come out ahead.",
            request.model
        ))
    }
}
