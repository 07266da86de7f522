//! Idea generation.

use crate::app::AppContext;
use crate::domain::prompt::build_idea_prompt;
use crate::domain::{
    AppError, BrainstormRequest, IDEA_TEMPERATURE, IdeaList, SessionState, TemplateRenderer,
    parse_ideas,
};
use crate::ports::{CompletionClient, CompletionRequest};

/// Generate ideas for `request` and return the state that holds them.
///
/// On any failure `state` stays as the caller's current state; partial results
/// are discarded.
pub fn generate_ideas<C: CompletionClient, R: TemplateRenderer>(
    ctx: &AppContext<C, R>,
    state: &SessionState,
    request: BrainstormRequest,
) -> Result<SessionState, AppError> {
    let prompt = build_idea_prompt(&request, ctx.renderer())?;
    let raw = ctx.client().complete(&CompletionRequest {
        prompt,
        model: ctx.model().to_string(),
        temperature: IDEA_TEMPERATURE,
    })?;

    let parsed = parse_ideas(&raw);
    tracing::debug!(parsed = parsed.len(), raw_lines = raw.lines().count(), "parsed idea response");

    let ideas = IdeaList::accept(parsed)?;
    Ok(state.with_batch(request, ideas))
}
