//! Chat completions client implementation using reqwest.

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CREDENTIAL_ENV_VAR, CompletionConfig};
use crate::ports::{CompletionClient, CompletionRequest};

const DEFAULT_STATUS_MESSAGE: &str = "Completion API request failed";

/// HTTP transport for an OpenAI-compatible chat completions endpoint.
///
/// This client performs a single request per call and never retries.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionConfig) -> Result<Self, AppError> {
        let client = Client::builder().build().map_err(|e| {
            AppError::service(format!("Failed to create HTTP client: {}", e), None)
        })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the credential environment variable.
    ///
    /// Fails with [`AppError::MissingCredential`] before any network activity
    /// when the variable is unset or blank.
    pub fn from_env_with_config(config: &CompletionConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(CREDENTIAL_ENV_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| AppError::MissingCredential(CREDENTIAL_ENV_VAR.into()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<String, AppError> {
        tracing::debug!(
            url = %self.api_url,
            model = %request.model,
            temperature = request.temperature,
            prompt_chars = request.messages.iter().map(|m| m.content.len()).sum::<usize>(),
            "sending completion request"
        );

        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::service(format!("HTTP request failed: {}", e), None))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();
        tracing::debug!(
            status = status.as_u16(),
            body_chars = body_text.len(),
            "completion response"
        );

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                AppError::service(format!("Failed to parse response: {}", e), Some(status.as_u16()))
            })?;

            return api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| {
                    AppError::service("No completion text in response", Some(status.as_u16()))
                });
        }

        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status == StatusCode::TOO_MANY_REQUESTS {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(AppError::Authentication(message));
        }

        Err(AppError::service(message, Some(status.as_u16())))
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    temperature: f32,
    messages: Vec<ApiMessage>,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, AppError> {
        let api_request = ApiRequest {
            model: request.model.clone(),
            temperature: request.temperature,
            messages: vec![ApiMessage { role: "user", content: request.prompt.clone() }],
        };

        self.send_request(&api_request)
    }
}
