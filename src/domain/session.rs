//! Caller-held session state.
//!
//! Handlers take a `&SessionState` and return a new one on success, so a
//! failed operation leaves the caller's state exactly as it was.

use crate::domain::{AppError, BrainstormRequest, IdeaList, Outline};

/// An accepted idea list together with the request that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdeaBatch {
    pub request: BrainstormRequest,
    pub ideas: IdeaList,
}

/// The chosen idea and the outline generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
    pub idea: String,
    pub outline: Outline,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    batch: Option<IdeaBatch>,
    selection: Option<Selection>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn batch(&self) -> Option<&IdeaBatch> {
        self.batch.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn outline(&self) -> Option<&Outline> {
        self.selection.as_ref().map(|selection| &selection.outline)
    }

    /// Replace the idea list. Any selection made against the previous list is
    /// discarded.
    pub fn with_batch(&self, request: BrainstormRequest, ideas: IdeaList) -> Self {
        Self { batch: Some(IdeaBatch { request, ideas }), selection: None }
    }

    /// Replace the current selection and outline.
    pub fn with_selection(&self, index: usize, outline: Outline) -> Result<Self, AppError> {
        let idea = self.idea_at(index)?.to_string();
        Ok(Self { batch: self.batch.clone(), selection: Some(Selection { index, idea, outline }) })
    }

    /// Look up an idea by zero-based position in the current batch.
    pub fn idea_at(&self, index: usize) -> Result<&str, AppError> {
        let batch = self.batch.as_ref().ok_or_else(no_ideas_yet)?;
        batch.ideas.get(index).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Idea #{} does not exist; choose between 1 and {}",
                index + 1,
                batch.ideas.len()
            ))
        })
    }
}

pub(crate) fn no_ideas_yet() -> AppError {
    AppError::invalid_input("No ideas generated yet. Generate ideas first.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tone;

    fn request(topic: &str) -> BrainstormRequest {
        BrainstormRequest::new(topic, "beginners", Tone::Casual, None).unwrap()
    }

    fn ideas(items: &[&str]) -> IdeaList {
        IdeaList::accept(items.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn new_batch_clears_selection() {
        let state = SessionState::new()
            .with_batch(request("travel"), ideas(&["a", "b", "c"]))
            .with_selection(1, Outline::new("TITLE: b"))
            .unwrap();
        assert!(state.outline().is_some());

        let state = state.with_batch(request("cooking"), ideas(&["d", "e", "f"]));
        assert!(state.selection().is_none());
        assert_eq!(state.batch().unwrap().request.topic(), "cooking");
    }

    #[test]
    fn new_selection_replaces_previous_outline() {
        let state = SessionState::new()
            .with_batch(request("travel"), ideas(&["a", "b", "c"]))
            .with_selection(0, Outline::new("first outline"))
            .unwrap()
            .with_selection(2, Outline::new("second outline"))
            .unwrap();

        let selection = state.selection().unwrap();
        assert_eq!(selection.idea, "c");
        assert_eq!(selection.outline.as_str(), "second outline");
    }

    #[test]
    fn selection_requires_existing_idea() {
        let err = SessionState::new().with_selection(0, Outline::new("x")).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));

        let state = SessionState::new().with_batch(request("travel"), ideas(&["a", "b", "c"]));
        let err = state.with_selection(3, Outline::new("x")).unwrap_err();
        assert!(err.to_string().contains("Idea #4 does not exist"));
    }
}
