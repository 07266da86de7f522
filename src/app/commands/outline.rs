//! Outline generation for a selected idea.

use crate::app::AppContext;
use crate::domain::prompt::build_outline_prompt;
use crate::domain::session::no_ideas_yet;
use crate::domain::{
    AppError, BrainstormRequest, OUTLINE_TEMPERATURE, Outline, SessionState, TemplateRenderer,
};
use crate::ports::{CompletionClient, CompletionRequest};

/// Generate an outline for `idea` using the topic, audience and tone of `request`.
///
/// The response is returned verbatim.
pub fn generate_outline<C: CompletionClient, R: TemplateRenderer>(
    ctx: &AppContext<C, R>,
    idea: &str,
    request: &BrainstormRequest,
) -> Result<Outline, AppError> {
    let prompt = build_outline_prompt(idea, request, ctx.renderer())?;
    let raw = ctx.client().complete(&CompletionRequest {
        prompt,
        model: ctx.model().to_string(),
        temperature: OUTLINE_TEMPERATURE,
    })?;

    let outline = Outline::new(raw);
    let missing = outline.missing_headers();
    if !missing.is_empty() {
        tracing::warn!(?missing, "outline response lacks requested section headers");
    }
    Ok(outline)
}

/// Select the idea at zero-based `index` and generate its outline.
///
/// The outline is built from the request that produced the current idea list.
/// On success the new selection replaces any previous one; on failure `state`
/// is left as it was.
pub fn select_idea<C: CompletionClient, R: TemplateRenderer>(
    ctx: &AppContext<C, R>,
    state: &SessionState,
    index: usize,
) -> Result<SessionState, AppError> {
    let idea = state.idea_at(index)?;
    let batch = state.batch().ok_or_else(no_ideas_yet)?;

    let outline = generate_outline(ctx, idea, &batch.request)?;
    state.with_selection(index, outline)
}
