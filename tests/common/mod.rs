//! Shared testing utilities for brainstormer CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const CREDENTIAL_ENV_VAR: &str = "OPEN_API_KEY";
pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Point the CLI at a mock completions endpoint via `brainstormer.toml`.
    pub fn use_server(&self, server: &mockito::Server) {
        let content = format!(
            "[completion]\napi_url = \"{}{}\"\nmodel = \"gpt-4\"\n",
            server.url(),
            COMPLETIONS_PATH
        );
        fs::write(self.work_dir.join("brainstormer.toml"), content)
            .expect("Failed to write brainstormer.toml");
    }

    /// Build a command with a credential set.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_without_key();
        cmd.env(CREDENTIAL_ENV_VAR, "sk-test");
        cmd
    }

    /// Build a command with no credential in the environment.
    pub fn cli_without_key(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("brainstormer").expect("Failed to locate brainstormer binary");
        cmd.current_dir(&self.work_dir).env_remove(CREDENTIAL_ENV_VAR).env("RUST_LOG", "off");
        cmd
    }

    /// Files in `dir`, sorted by name.
    pub fn files_in(&self, dir: &Path) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(dir)
            .expect("Failed to read directory")
            .map(|entry| entry.expect("Failed to read entry").path())
            .collect();
        files.sort();
        files
    }
}

/// Chat completions response body whose first choice carries `text`.
#[allow(dead_code)]
pub fn chat_body(text: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": text},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}
