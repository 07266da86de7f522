//! Idea-list parsing and acceptance.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::AppError;

/// Minimum number of parsed ideas for a generation to be accepted.
pub const MIN_IDEAS: usize = 3;

static NUMBERED_LINE: OnceLock<Regex> = OnceLock::new();

fn numbered_line() -> &'static Regex {
    NUMBERED_LINE.get_or_init(|| Regex::new(r"^\d+\.?\s*(.+)$").expect("numbered line pattern"))
}

/// Extract ideas from a numbered-list response.
///
/// Each line is trimmed and must start with a numeral, optionally followed by a
/// period and whitespace. The remainder becomes an idea. Non-matching lines are
/// dropped without error.
pub fn parse_ideas(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| {
            numbered_line().captures(line.trim()).map(|caps| caps[1].to_string())
        })
        .collect()
}

/// An accepted, ordered list of ideas. Position `i` is presented as `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaList(Vec<String>);

impl IdeaList {
    /// Accept parsed ideas, or reject the whole batch when fewer than
    /// [`MIN_IDEAS`] were found.
    pub fn accept(ideas: Vec<String>) -> Result<Self, AppError> {
        if ideas.len() < MIN_IDEAS {
            return Err(AppError::InsufficientIdeas { found: ideas.len(), required: MIN_IDEAS });
        }
        Ok(Self(ideas))
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Lines of the form `1. idea`.
    pub fn numbered(&self) -> Vec<String> {
        self.iter().enumerate().map(|(i, idea)| format!("{}. {}", i + 1, idea)).collect()
    }
}
