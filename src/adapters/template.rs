//! Prompt rendering with minijinja.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::prompt::{PromptAssemblyError, PromptContext, TemplateRenderer};

/// Renders the built-in prompt templates.
///
/// Every `{{ name }}` must be bound in the context; an unbound name fails the
/// render instead of producing an empty string. Output is not HTML-escaped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        template: &str,
        context: &PromptContext,
        template_name: &str,
    ) -> Result<String, PromptAssemblyError> {
        environment().render_str(template, &context.variables).map_err(|err| {
            PromptAssemblyError::TemplateRenderError {
                template: template_name.to_string(),
                reason: err.to_string(),
            }
        })
    }
}
