//! Completion API port definition.

use crate::domain::AppError;

/// One prompt sent to the text-generation model.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// Fully rendered prompt text.
    pub prompt: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature.
    pub temperature: f32,
}

/// Port for synchronous text completion.
///
/// Implementations return the model's raw response text. A rejected credential
/// maps to [`AppError::Authentication`]; every other failure maps to
/// [`AppError::Service`].
pub trait CompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError>;
}
