//! Application Context
//!
//! Shared state provided via Leptos Context API. Components reach the
//! controller only through this handle.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::AppConfig;
use crate::controller::TaskListController;
use crate::edit::EditOutcome;
use crate::models::{Filter, TaskId, Theme};
use crate::storage::BrowserStore;
use crate::view_model::TaskListView;

pub type Controller = TaskListController<BrowserStore>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single owner of task state
    controller: RwSignal<Controller>,
    /// Filtered list and counters, recomputed when the controller changes
    pub view: Memo<TaskListView>,
    /// Row that just got added, cleared after `highlight_ms`
    highlighted: RwSignal<Option<TaskId>>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(controller: Controller, config: AppConfig) -> Self {
        let controller = RwSignal::new(controller);
        Self {
            controller,
            view: Memo::new(move |_| controller.with(|c| c.view())),
            highlighted: RwSignal::new(None),
            config: StoredValue::new(config),
        }
    }

    // ========================
    // Reactive reads
    // ========================

    pub fn theme(&self) -> Theme {
        self.controller.with(|c| c.theme())
    }

    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.controller.with(|c| c.is_editing(id))
    }

    pub fn is_removing(&self, id: &TaskId) -> bool {
        self.controller.with(|c| c.is_removing(id))
    }

    pub fn is_highlighted(&self, id: &TaskId) -> bool {
        self.highlighted.with(|h| h.as_ref() == Some(id))
    }

    /// Untracked check for event handlers
    pub fn is_editing_now(&self, id: &TaskId) -> bool {
        self.controller.with_untracked(|c| c.is_editing(id))
    }

    // ========================
    // Actions
    // ========================

    /// Returns true if a task was created (the caller clears its input)
    pub fn add_task(&self, raw_text: &str) -> bool {
        let added = self.controller.write().add_task(raw_text);
        match added {
            Some(id) => {
                self.flash(id);
                true
            }
            None => false,
        }
    }

    pub fn toggle(&self, id: &TaskId) {
        self.controller.write().toggle_complete(id);
    }

    /// Fade the row out, then drop the task. Repeat clicks while fading do nothing.
    pub fn remove(&self, id: &TaskId) {
        if !self.controller.write().begin_remove(id) {
            return;
        }
        let controller = self.controller;
        let delay = self.config.with_value(|c| c.remove_transition_ms);
        let id = id.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            controller.write().remove_task(&id);
        });
    }

    pub fn start_edit(&self, id: &TaskId) {
        self.controller.write().start_edit(id);
    }

    pub fn commit_edit(&self, id: &TaskId, text: &str) {
        match self.controller.write().commit_edit(id, text) {
            EditOutcome::Updated(text) => log::debug!("task {} is now {:?}", id, text),
            EditOutcome::Reverted(original) => log::debug!("edit of {} reverted to {:?}", id, original),
            EditOutcome::Missing => log::debug!("edit of {} dropped, task is gone", id),
        }
    }

    pub fn cancel_edit(&self, id: &TaskId) {
        self.controller.write().cancel_edit(id);
    }

    pub fn set_filter(&self, filter: Filter) {
        self.controller.write().set_filter(filter);
    }

    pub fn clear_completed(&self) {
        self.controller.write().clear_completed();
    }

    pub fn set_theme(&self, is_light: bool) {
        self.controller.write().set_theme(is_light);
    }

    /// Highlight a freshly added row; a later add takes over the highlight
    fn flash(&self, id: TaskId) {
        self.highlighted.set(Some(id.clone()));
        let highlighted = self.highlighted;
        let delay = self.config.with_value(|c| c.highlight_ms);
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            highlighted.update(|h| {
                if h.as_ref() == Some(&id) {
                    *h = None;
                }
            });
        });
    }
}
