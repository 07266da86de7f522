//! Configuration models loaded from `brainstormer.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE: &str = "brainstormer.toml";

/// Environment variable holding the completion API key.
pub const CREDENTIAL_ENV_VAR: &str = "OPEN_API_KEY";

/// Sampling temperature for idea generation (favors variety).
pub const IDEA_TEMPERATURE: f32 = 0.7;

/// Sampling temperature for outline generation (favors structure).
pub const OUTLINE_TEMPERATURE: f32 = 0.5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub completion: CompletionConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.completion.validate()
    }
}

/// Completion API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompletionConfig {
    /// Chat completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self { api_url: default_api_url(), model: default_model() }
    }
}

impl CompletionConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::config_error("completion.model must not be empty"));
        }
        if !matches!(self.api_url.scheme(), "http" | "https") {
            return Err(AppError::config_error(format!(
                "completion.api_url must be http or https, got '{}'",
                self.api_url.scheme()
            )));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions").expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4".to_string()
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = parse_config_content("").unwrap();
        assert_eq!(config.completion.model, "gpt-4");
        assert_eq!(
            config.completion.api_url.as_str(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn overrides_are_applied() {
        let config = parse_config_content(
            r#"
[completion]
api_url = "http://localhost:8080/v1/chat/completions"
model = "gpt-4o-mini"
"#,
        )
        .unwrap();
        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.completion.api_url.port(), Some(8080));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = parse_config_content("[completion]\ntemperature = 1.0\n").unwrap_err();
        assert!(matches!(err, AppError::TomlParseError(_)));
    }

    #[test]
    fn blank_model_is_rejected() {
        let err = parse_config_content("[completion]\nmodel = \" \"\n").unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn non_http_url_is_rejected() {
        let err =
            parse_config_content("[completion]\napi_url = \"ftp://example.com\"\n").unwrap_err();
        assert!(err.to_string().contains("http or https"));
    }
}
