//! Configuration loading for the CLI.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::configuration::parse_config_content;
use crate::domain::{AppConfig, AppError, CONFIG_FILE};

/// Load `.env` from the working directory or its parents, if present.
///
/// Variables already set in the process environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(err) if err.not_found() => tracing::debug!(".env not found"),
        Err(err) => tracing::warn!(error = %err, "failed to load .env"),
    }
}

/// Load `brainstormer.toml` from `dir`, falling back to defaults when absent.
pub fn load_config(dir: &Path) -> Result<AppConfig, AppError> {
    let path = dir.join(CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "loading config");
            parse_config_content(&content).map_err(|err| match err {
                AppError::TomlParseError(parse) => {
                    AppError::config_error(format!("Invalid {}: {}", path.display(), parse))
                }
                other => other,
            })
        }
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(err) => Err(err.into()),
    }
}
