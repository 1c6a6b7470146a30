//! Stats Panel Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Total / completed / active counters
#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let stats = move || ctx.view.with(|v| v.stats);

    view! {
        <div class="stats">
            <div class="stat">
                <span class="stat-value" id="statTotal">{move || stats().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="statCompleted">{move || stats().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat">
                <span class="stat-value" id="statActive">{move || stats().active}</span>
                <span class="stat-label">"Active"</span>
            </div>
        </div>
    }
}
