/// Section headers the outline prompt asks the model to use, in order.
///
/// The model is not required to follow them; see [`Outline::missing_headers`].
pub const OUTLINE_SECTION_HEADERS: [&str; 7] = [
    "TITLE:",
    "INTRODUCTION:",
    "SECTION 1:",
    "SECTION 2:",
    "SECTION 3:",
    "CONCLUSION:",
    "CALL TO ACTION:",
];

/// Headers that may be omitted without the outline being unusual.
const OPTIONAL_HEADERS: [&str; 1] = ["SECTION 3:"];

/// Outline text exactly as the model returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outline(String);

impl Outline {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Required section headers that do not appear anywhere in the text.
    ///
    /// Informational only. An outline is never rejected for missing headers.
    pub fn missing_headers(&self) -> Vec<&'static str> {
        OUTLINE_SECTION_HEADERS
            .into_iter()
            .filter(|header| !OPTIONAL_HEADERS.contains(header))
            .filter(|header| !self.0.contains(header))
            .collect()
    }
}
