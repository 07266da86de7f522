//! brainstormer: turn a topic, audience, and tone into blog post ideas, then
//! expand one idea into a structured outline via an LLM completion API.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::AppContext;
pub use app::api::{HttpAppContext, http_context};
pub use app::commands::export::{export_outline, outline_links, write_outline};
pub use app::commands::ideas::generate_ideas;
pub use app::commands::outline::{generate_outline, select_idea};
pub use domain::{
    AppError, BrainstormRequest, DownloadArtifact, DownloadFormat, IdeaList, Outline,
    SessionState, Tone, parse_ideas,
};
pub use ports::{CompletionClient, CompletionRequest};
