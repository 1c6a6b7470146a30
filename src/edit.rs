//! Edit State
//!
//! Tracks the one task whose text is being edited.

use crate::models::TaskId;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Idle,
    Editing {
        id: TaskId,
        /// Text when editing started, shown again on revert
        original: String,
    },
}

impl EditState {
    pub fn start(&mut self, id: TaskId, original: String) {
        *self = EditState::Editing { id, original };
    }

    /// Leave editing if `id` is the task being edited; returns its original text
    pub fn finish(&mut self, id: &TaskId) -> Option<String> {
        if !self.is_editing(id) {
            return None;
        }
        match std::mem::take(self) {
            EditState::Editing { original, .. } => Some(original),
            EditState::Idle => None,
        }
    }

    pub fn editing_id(&self) -> Option<&TaskId> {
        match self {
            EditState::Editing { id, .. } => Some(id),
            EditState::Idle => None,
        }
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.editing_id() == Some(id)
    }
}

/// Result of committing or cancelling an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// New text stored and persisted
    Updated(String),
    /// Nothing written; display goes back to this text
    Reverted(String),
    /// No such task
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_then_finish() {
        let id = TaskId::new("1");
        let mut state = EditState::default();
        state.start(id.clone(), "old".into());
        assert!(state.is_editing(&id));

        assert_eq!(state.finish(&id), Some("old".to_string()));
        assert_eq!(state, EditState::Idle);
    }

    #[test]
    fn test_finish_other_id_keeps_editing() {
        let mut state = EditState::default();
        state.start(TaskId::new("1"), "old".into());

        assert_eq!(state.finish(&TaskId::new("2")), None);
        assert_eq!(state.editing_id(), Some(&TaskId::new("1")));
    }

    #[test]
    fn test_start_replaces_current() {
        let mut state = EditState::default();
        state.start(TaskId::new("1"), "a".into());
        state.start(TaskId::new("2"), "b".into());
        assert_eq!(state.editing_id(), Some(&TaskId::new("2")));
    }
}
