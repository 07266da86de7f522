//! The two fixed prompt templates and their variable bindings.

use super::template::{PromptAssemblyError, PromptContext, TemplateRenderer};
use crate::domain::BrainstormRequest;

pub const IDEA_TEMPLATE_NAME: &str = "idea_generation";
pub const OUTLINE_TEMPLATE_NAME: &str = "outline_generation";

const IDEA_TEMPLATE: &str = "\
You're a creative blogger. Generate 3-5 blog post ideas for the topic {{ topic }}, \
targeting {{ audience }}, in a {{ tone }} tone. {{ keywords_clause }}

Format your response as a numbered list with only the ideas, one per line.
Each idea should be catchy, specific, and tailored to the audience.
";

const OUTLINE_TEMPLATE: &str = "\
You're a content strategist. Create a detailed blog outline for {{ selected_idea }}.
Include a title, intro, 2-3 main sections with subheadings, conclusion, and CTA.
Use a {{ tone }} tone for {{ audience }} interested in {{ topic }}.

Format your response with these sections:

TITLE: (A catchy, SEO-friendly title)

INTRODUCTION:
- (Hook to grab attention)
- (Context about the topic)
- (What readers will learn)

SECTION 1: (Main section heading)
- (Subpoint 1)
- (Subpoint 2)
- (Subpoint 3)

SECTION 2: (Main section heading)
- (Subpoint 1)
- (Subpoint 2)
- (Subpoint 3)

SECTION 3: (Main section heading - optional)
- (Subpoint 1)
- (Subpoint 2)
- (Subpoint 3)

CONCLUSION:
- (Summary of key points)
- (Final thoughts)

CALL TO ACTION:
- (Specific action for reader to take)
";

/// Sentence appended to the idea prompt when keywords were supplied.
pub fn keywords_clause(keywords: Option<&str>) -> String {
    match keywords {
        Some(keywords) => format!("Include these keywords or goals: {}", keywords),
        None => String::new(),
    }
}

/// Render the idea-generation prompt for `request`.
pub fn build_idea_prompt(
    request: &BrainstormRequest,
    renderer: &impl TemplateRenderer,
) -> Result<String, PromptAssemblyError> {
    let context = PromptContext::new()
        .with_var("topic", request.topic())
        .with_var("audience", request.audience())
        .with_var("tone", request.tone().prompt_text())
        .with_var("keywords_clause", keywords_clause(request.keywords()));

    renderer.render(IDEA_TEMPLATE, &context, IDEA_TEMPLATE_NAME)
}

/// Render the outline-generation prompt for `idea`, using the topic, audience
/// and tone of the request that produced it.
pub fn build_outline_prompt(
    idea: &str,
    request: &BrainstormRequest,
    renderer: &impl TemplateRenderer,
) -> Result<String, PromptAssemblyError> {
    let context = PromptContext::new()
        .with_var("selected_idea", idea)
        .with_var("topic", request.topic())
        .with_var("audience", request.audience())
        .with_var("tone", request.tone().prompt_text());

    renderer.render(OUTLINE_TEMPLATE, &context, OUTLINE_TEMPLATE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MinijinjaTemplateRenderer;
    use crate::domain::{OUTLINE_SECTION_HEADERS, Tone};

    fn request(keywords: Option<&str>) -> BrainstormRequest {
        BrainstormRequest::new(
            "home cooking",
            "busy parents",
            Tone::Humorous,
            keywords.map(str::to_string),
        )
        .unwrap()
    }

    #[test]
    fn idea_prompt_interpolates_fields() {
        let prompt = build_idea_prompt(&request(None), &MinijinjaTemplateRenderer::new()).unwrap();
        assert!(prompt.contains("for the topic home cooking,"));
        assert!(prompt.contains("targeting busy parents, in a humorous tone."));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn idea_prompt_omits_keywords_clause_when_absent() {
        let prompt = build_idea_prompt(&request(None), &MinijinjaTemplateRenderer::new()).unwrap();
        assert!(!prompt.contains("Include these keywords"));
    }

    #[test]
    fn idea_prompt_embeds_keywords_verbatim() {
        let prompt = build_idea_prompt(
            &request(Some("SEO, {{ not a variable }}")),
            &MinijinjaTemplateRenderer::new(),
        )
        .unwrap();
        assert!(prompt.contains("Include these keywords or goals: SEO, {{ not a variable }}"));
    }

    #[test]
    fn outline_prompt_requests_every_section_header() {
        let prompt = build_outline_prompt(
            "10 Lazy Dinners",
            &request(None),
            &MinijinjaTemplateRenderer::new(),
        )
        .unwrap();
        assert!(prompt.contains("detailed blog outline for 10 Lazy Dinners."));
        assert!(
            prompt.contains("Use a humorous tone for busy parents interested in home cooking.")
        );
        for header in OUTLINE_SECTION_HEADERS {
            assert!(prompt.contains(header), "missing header {}", header);
        }
    }

    #[test]
    fn keywords_clause_is_empty_without_keywords() {
        assert_eq!(keywords_clause(None), "");
        assert_eq!(keywords_clause(Some("growth")), "Include these keywords or goals: growth");
    }
}
