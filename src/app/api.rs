//! Wiring of production adapters.

use std::path::Path;

use crate::adapters::{HttpCompletionClient, MinijinjaTemplateRenderer};
use crate::app::AppContext;
use crate::app::config::load_config;
use crate::domain::AppError;

/// Context backed by the HTTP completion client.
pub type HttpAppContext = AppContext<HttpCompletionClient, MinijinjaTemplateRenderer>;

/// Build the production context from `brainstormer.toml` in `dir` and the
/// credential in the environment.
///
/// Fails before any network activity when the credential is missing.
pub fn http_context(dir: &Path) -> Result<HttpAppContext, AppError> {
    let config = load_config(dir)?;
    let client = HttpCompletionClient::from_env_with_config(&config.completion)?;
    tracing::debug!(
        model = %config.completion.model,
        url = %config.completion.api_url,
        "context ready"
    );
    Ok(AppContext::new(client, MinijinjaTemplateRenderer::new(), config.completion.model))
}

/// Build the production context from the current working directory.
pub fn current_context() -> Result<HttpAppContext, AppError> {
    let cwd = std::env::current_dir()?;
    http_context(&cwd)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CREDENTIAL_ENV_VAR;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn missing_credential_fails_context_creation() {
        let dir = TempDir::new().unwrap();
        unsafe {
            std::env::remove_var(CREDENTIAL_ENV_VAR);
        }

        let err = http_context(dir.path()).unwrap_err();
        assert!(matches!(err, AppError::MissingCredential(_)));
        assert!(err.to_string().contains(CREDENTIAL_ENV_VAR));
    }

    #[test]
    #[serial]
    fn context_uses_configured_model() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("brainstormer.toml"), "[completion]\nmodel = \"gpt-4o\"\n")
            .unwrap();
        unsafe {
            std::env::set_var(CREDENTIAL_ENV_VAR, "sk-test");
        }

        let ctx = http_context(dir.path()).unwrap();
        assert_eq!(ctx.model(), "gpt-4o");

        unsafe {
            std::env::remove_var(CREDENTIAL_ENV_VAR);
        }
    }
}
