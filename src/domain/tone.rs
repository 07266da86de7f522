use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// Writing tone offered by the brainstorm form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Casual,
    Professional,
    Humorous,
    Informative,
    Inspirational,
}

impl Tone {
    /// All tones in form order.
    pub const ALL: [Tone; 5] =
        [Tone::Casual, Tone::Professional, Tone::Humorous, Tone::Informative, Tone::Inspirational];

    /// Label shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Casual => "Casual",
            Tone::Professional => "Professional",
            Tone::Humorous => "Humorous",
            Tone::Informative => "Informative",
            Tone::Inspirational => "Inspirational",
        }
    }

    /// Lowercase form interpolated into prompts.
    pub fn prompt_text(&self) -> String {
        self.label().to_lowercase()
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|tone| tone.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Tone {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::from_label(s).ok_or_else(|| {
            let labels: Vec<&str> = Tone::ALL.iter().map(|tone| tone.label()).collect();
            AppError::invalid_input(format!(
                "Invalid tone '{}': must be one of {}",
                s,
                labels.join(", ")
            ))
        })
    }
}
