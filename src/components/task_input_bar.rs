//! Task Input Bar Component
//!
//! Form for creating new tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;

/// Text field + submit button for new tasks
#[component]
pub fn TaskInputBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_text, set_new_text) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&new_text.get_untracked()) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="todo-input-bar" on:submit=add_task>
            <input
                id="todoInput"
                type="text"
                placeholder="What needs to be done?"
                autocomplete="off"
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlElement>().ok()) {
                            let _ = input.blur();
                        }
                    }
                }
            />
            <button type="submit" class="add-btn">"Add"</button>
        </form>
    }
}
