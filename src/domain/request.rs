use crate::domain::{AppError, Tone};

/// Form input for one idea-generation call.
///
/// Fields are private so a request can only exist once topic and audience
/// have been checked. Values are kept verbatim; they are interpolated into
/// the prompt as typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrainstormRequest {
    topic: String,
    audience: String,
    tone: Tone,
    keywords: Option<String>,
}

impl BrainstormRequest {
    pub fn new(
        topic: impl Into<String>,
        audience: impl Into<String>,
        tone: Tone,
        keywords: Option<String>,
    ) -> Result<Self, AppError> {
        let topic = topic.into();
        let audience = audience.into();

        if topic.trim().is_empty() || audience.trim().is_empty() {
            return Err(AppError::invalid_input(
                "Please provide both a topic and target audience.",
            ));
        }

        let keywords = keywords.filter(|value| !value.trim().is_empty());

        Ok(Self { topic, audience, tone, keywords })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn audience(&self) -> &str {
        &self.audience
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Optional keywords or goals; `None` when the field was left blank.
    pub fn keywords(&self) -> Option<&str> {
        self.keywords.as_deref()
    }
}
