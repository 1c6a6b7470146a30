//! Task List Component
//!
//! Renders the tasks visible under the current filter.

use leptos::prelude::*;

use crate::components::TaskItem;
use crate::context::AppContext;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <ul class="todo-list" id="todoList">
            <For
                each=move || ctx.view.get().visible
                // Mutable fields are part of the key so edits re-render the row
                key=|task| (task.id.clone(), task.text.clone(), task.completed)
                children=move |task| view! { <TaskItem task=task /> }
            />
        </ul>
    }
}
