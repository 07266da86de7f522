pub mod configuration;
pub mod download;
pub mod error;
pub mod ideas;
pub mod outline;
pub mod prompt;
pub mod request;
pub mod session;
pub mod tone;

pub use configuration::{
    AppConfig, CONFIG_FILE, CREDENTIAL_ENV_VAR, CompletionConfig, IDEA_TEMPERATURE,
    OUTLINE_TEMPERATURE,
};
pub use download::{DownloadArtifact, DownloadFormat, download_link, outline_artifacts};
pub use error::AppError;
pub use ideas::{IdeaList, MIN_IDEAS, parse_ideas};
pub use outline::{OUTLINE_SECTION_HEADERS, Outline};
pub use prompt::{PromptAssemblyError, PromptContext, TemplateRenderer};
pub use request::BrainstormRequest;
pub use session::{IdeaBatch, Selection, SessionState};
pub use tone::Tone;
