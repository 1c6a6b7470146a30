//! Derived View
//!
//! Pure projection of the task list under a filter, plus the counters.

use crate::models::{Filter, Task};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total: tasks.len(),
            completed,
            active: tasks.len() - completed,
        }
    }

    /// "1 task left", "0 tasks left", "3 tasks left"
    pub fn tasks_left_label(&self) -> String {
        let plural = if self.active == 1 { "" } else { "s" };
        format!("{} task{} left", self.active, plural)
    }
}

/// What the list shows right now
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskListView {
    pub filter: Filter,
    pub visible: Vec<Task>,
    pub stats: TaskStats,
}

/// Visible tasks keep insertion order for every filter
pub fn derive_view(tasks: &[Task], filter: Filter) -> TaskListView {
    TaskListView {
        filter,
        visible: tasks.iter().filter(|t| filter.matches(t)).cloned().collect(),
        stats: TaskStats::of(tasks),
    }
}
