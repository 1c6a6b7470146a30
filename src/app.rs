//! TaskForge Frontend App
//!
//! Root component: loads persisted state and lays out the task list.

use leptos::prelude::*;

use crate::components::{FilterBar, StatsPanel, TaskInputBar, TaskList, ThemeToggle};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::controller::TaskListController;
use crate::storage::{BrowserStore, StorageKeys};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = BrowserStore::detect();
    let persistent = store.is_persistent();
    let controller = TaskListController::load(store, StorageKeys::default());
    log::info!("[APP] restored {} tasks (persistent={})", controller.tasks().len(), persistent);

    let ctx = AppContext::new(controller, config);
    provide_context(ctx);

    let app_class = move || if ctx.theme().is_light() { "app light" } else { "app" };

    view! {
        <div class=app_class>
            <header class="app-header">
                <h1>"TaskForge"</h1>
                <ThemeToggle />
            </header>

            <TaskInputBar />
            <TaskList />
            <FilterBar />
            <StatsPanel />
        </div>
    }
}
