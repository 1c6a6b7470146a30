//! Filter Bar Component
//!
//! Remaining-count label, filter buttons and the clear-completed action.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Filter;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="todo-footer">
            <span class="tasks-left" id="tasksLeft">
                {move || ctx.view.with(|v| v.stats.tasks_left_label())}
            </span>

            <div class="filters" id="filters">
                {Filter::ALL.iter().map(|&filter| {
                    let is_current = move || ctx.view.with(|v| v.filter == filter);
                    view! {
                        <button
                            type="button"
                            class=move || if is_current() { "filter-btn active" } else { "filter-btn" }
                            data-filter=filter.as_str()
                            on:click=move |_| ctx.set_filter(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>

            <button type="button" class="clear-completed" id="clearCompleted" on:click=move |_| ctx.clear_completed()>
                "Clear completed"
            </button>
        </div>
    }
}
