use std::io;

use thiserror::Error;

use crate::domain::prompt::PromptAssemblyError;

/// Library-wide error type for brainstormer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Completion API credential is not set.
    #[error("API key not found. Set {0} in the environment or a .env file.")]
    MissingCredential(String),

    /// Caller-supplied input was rejected before any generation call.
    #[error("{0}")]
    InvalidInput(String),

    /// The model returned too few usable ideas.
    #[error(
        "Failed to generate enough ideas ({found} of at least {required}). \
         Please try again with different inputs."
    )]
    InsufficientIdeas { found: usize, required: usize },

    /// The completion API rejected the credential.
    #[error("Completion API rejected the API key: {0}")]
    Authentication(String),

    /// Any other completion API failure (network, timeout, quota, bad body).
    #[error("Completion API request failed{}: {}", status_suffix(.status), .message)]
    Service { message: String, status: Option<u16> },

    /// Prompt template rendering failed.
    #[error(transparent)]
    PromptAssembly(#[from] PromptAssemblyError),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        AppError::InvalidInput(message.into())
    }

    pub fn service<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Service { message: message.into(), status }
    }

    /// Whether the session can continue after this error.
    ///
    /// Credential and configuration problems (missing or rejected key) halt
    /// every generation operation. Everything else only fails the operation
    /// that raised it.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            AppError::MissingCredential(_)
                | AppError::Authentication(_)
                | AppError::Configuration(_)
                | AppError::TomlParseError(_)
        )
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" (status {})", code)).unwrap_or_default()
}
