pub mod builder;
pub mod template;

pub use builder::{build_idea_prompt, build_outline_prompt, keywords_clause};
pub use template::{PromptAssemblyError, PromptContext, TemplateRenderer};
