//! Theme Toggle Component

use leptos::prelude::*;

use crate::context::AppContext;

/// Checkbox switch; checked means light theme
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <label class="theme-toggle" title="Light theme">
            <input
                type="checkbox"
                id="themeToggle"
                prop:checked=move || ctx.theme().is_light()
                on:change=move |ev| ctx.set_theme(event_target_checked(&ev))
            />
            <span class="slider"></span>
        </label>
    }
}
