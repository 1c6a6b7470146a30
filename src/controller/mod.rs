//! Task List Controller
//!
//! Owns the task list, filter, theme and in-progress edit. Every mutation
//! is written through to the key-value store before returning.

use std::collections::HashSet;

use log::{debug, warn};

use crate::edit::{EditOutcome, EditState};
use crate::ids::IdSource;
use crate::models::{Filter, Task, TaskId, Theme};
use crate::storage::{KeyValueStore, StorageKeys};
use crate::view_model::{derive_view, TaskListView};


pub struct TaskListController<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
    tasks: Vec<Task>,
    filter: Filter,
    theme: Theme,
    edit: EditState,
    /// Tasks fading out, waiting for `remove_task`
    removing: HashSet<TaskId>,
    ids: IdSource,
}

impl<S: KeyValueStore> TaskListController<S> {
    /// Restore state from the store; anything missing or unreadable falls back to defaults
    pub fn load(store: S, keys: StorageKeys) -> Self {
        let tasks = match read_key(&store, &keys.tasks) {
            Some(raw) => decode_tasks(&raw),
            None => Vec::new(),
        };
        let filter = match read_key(&store, &keys.filter) {
            Some(raw) => Filter::parse(&raw).unwrap_or_else(|| {
                warn!("ignoring stored filter {:?}", raw);
                Filter::default()
            }),
            None => Filter::default(),
        };
        let theme = read_key(&store, &keys.theme)
            .map(|raw| Theme::from_stored(&raw))
            .unwrap_or_default();

        debug!(
            "loaded {} tasks, filter={}, theme={}",
            tasks.len(),
            filter.as_str(),
            theme.as_str()
        );

        Self {
            ids: IdSource::seeded_from(&tasks),
            store,
            keys,
            tasks,
            filter,
            theme,
            edit: EditState::default(),
            removing: HashSet::new(),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.edit.is_editing(id)
    }

    pub fn is_removing(&self, id: &TaskId) -> bool {
        self.removing.contains(id)
    }

    pub fn view(&self) -> TaskListView {
        derive_view(&self.tasks, self.filter)
    }

    fn find_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    // ========================
    // Mutations
    // ========================

    /// Append a task; whitespace-only input is ignored
    pub fn add_task(&mut self, raw_text: &str) -> Option<TaskId> {
        let text = raw_text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.ids.next();
        self.tasks.push(Task::new(id.clone(), text));
        debug!("added task {}", id);
        self.persist_tasks();
        Some(id)
    }

    /// Flip completion; returns false if the id is unknown
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.find_mut(id) else {
            return false;
        };
        task.completed = !task.completed;
        debug!("task {} completed={}", id, task.completed);
        self.persist_tasks();
        true
    }

    /// Mark a task as fading out. False if unknown or already pending,
    /// in which case the caller must not schedule another removal.
    pub fn begin_remove(&mut self, id: &TaskId) -> bool {
        if !self.tasks.iter().any(|t| &t.id == id) {
            return false;
        }
        self.removing.insert(id.clone())
    }

    /// Drop a task; returns false if the id is unknown
    pub fn remove_task(&mut self, id: &TaskId) -> bool {
        self.removing.remove(id);
        let before = self.tasks.len();
        self.tasks.retain(|t| &t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.edit.finish(id);
        debug!("removed task {}", id);
        self.persist_tasks();
        true
    }

    /// Enter edit mode for one task; false if the id is unknown
    pub fn start_edit(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter().find(|t| &t.id == id) else {
            return false;
        };
        let original = task.text.clone();
        self.edit.start(id.clone(), original);
        true
    }

    /// Store `new_text` if it is non-empty after trimming and differs from
    /// the current text; otherwise revert without writing.
    pub fn commit_edit(&mut self, id: &TaskId, new_text: &str) -> EditOutcome {
        let original = self.edit.finish(id);
        let trimmed = new_text.trim();
        let Some(task) = self.find_mut(id) else {
            return EditOutcome::Missing;
        };
        if trimmed.is_empty() || trimmed == task.text {
            return EditOutcome::Reverted(original.unwrap_or_else(|| task.text.clone()));
        }
        task.text = trimmed.to_string();
        let text = task.text.clone();
        debug!("task {} renamed", id);
        self.persist_tasks();
        EditOutcome::Updated(text)
    }

    /// Leave edit mode without writing anything
    pub fn cancel_edit(&mut self, id: &TaskId) -> EditOutcome {
        let original = self.edit.finish(id);
        match self.tasks.iter().find(|t| &t.id == id) {
            Some(task) => EditOutcome::Reverted(original.unwrap_or_else(|| task.text.clone())),
            None => EditOutcome::Missing,
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
        if let Err(e) = self.store.set(&self.keys.filter, filter.as_str()) {
            warn!("failed to persist filter: {}", e);
        }
    }

    /// Drop every completed task; always writes the list. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        let tasks = &self.tasks;
        self.removing.retain(|id| tasks.iter().any(|t| &t.id == id));
        if let Some(id) = self.edit.editing_id().cloned() {
            if !self.tasks.iter().any(|t| t.id == id) {
                self.edit.finish(&id);
            }
        }
        debug!("cleared {} completed tasks", removed);
        self.persist_tasks();
        removed
    }

    pub fn set_theme(&mut self, is_light: bool) {
        self.theme = Theme::from_light(is_light);
        if let Err(e) = self.store.set(&self.keys.theme, self.theme.as_str()) {
            warn!("failed to persist theme: {}", e);
        }
    }

    // ========================
    // Persistence
    // ========================

    fn persist_tasks(&mut self) {
        let json = match serde_json::to_string(&self.tasks) {
            Ok(json) => json,
            Err(e) => {
                warn!("failed to encode tasks: {}", e);
                return;
            }
        };
        if let Err(e) = self.store.set(&self.keys.tasks, &json) {
            warn!("failed to persist tasks: {}", e);
        }
    }
}

fn read_key<S: KeyValueStore>(store: &S, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value,
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Parse the stored list; corrupt JSON reads as empty, blank entries are dropped
fn decode_tasks(raw: &str) -> Vec<Task> {
    match serde_json::from_str::<Vec<Task>>(raw) {
        Ok(mut tasks) => {
            let before = tasks.len();
            tasks.retain(|t| !t.text.trim().is_empty());
            if tasks.len() != before {
                warn!("dropped {} stored tasks with empty text", before - tasks.len());
            }
            tasks
        }
        Err(e) => {
            warn!("stored tasks unreadable, starting empty: {}", e);
            Vec::new()
        }
    }
}
