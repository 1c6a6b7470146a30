//! Task Item Component
//!
//! One row: completion toggle, text (or edit field), edit and delete actions.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Task;

/// A single task row
#[component]
pub fn TaskItem(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = task.id.clone();
    let completed = task.completed;
    let text = task.text;

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("todo-item");
            if completed {
                c.push_str(" completed");
            }
            if ctx.is_removing(&id) {
                c.push_str(" removing");
            }
            if ctx.is_highlighted(&id) {
                c.push_str(" highlight");
            }
            c
        }
    };

    let toggle_click = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| ctx.toggle(&id)
    };
    let toggle_key = {
        let id = id.clone();
        move |ev: web_sys::KeyboardEvent| {
            let key = ev.key();
            if key == " " || key == "Enter" {
                ev.prevent_default();
                ctx.toggle(&id);
            }
        }
    };

    // Focus the edit field and select its text once it mounts
    let edit_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = edit_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    let text_or_editor = {
        let id = id.clone();
        move || {
            if ctx.is_editing(&id) {
                let key_id = id.clone();
                let blur_id = id.clone();
                view! {
                    <input
                        class="todo-edit"
                        type="text"
                        node_ref=edit_ref
                        prop:value=text.clone()
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            match ev.key().as_str() {
                                "Enter" => {
                                    ev.prevent_default();
                                    ctx.commit_edit(&key_id, &event_target_value(&ev));
                                }
                                "Escape" => ctx.cancel_edit(&key_id),
                                _ => {}
                            }
                        }
                        on:blur=move |ev| {
                            // Enter/Escape already left edit mode
                            if ctx.is_editing_now(&blur_id) {
                                ctx.commit_edit(&blur_id, &event_target_value(&ev));
                            }
                        }
                    />
                }
                .into_any()
            } else {
                let dbl_id = id.clone();
                view! {
                    <span
                        class="todo-text"
                        title=text.clone()
                        tabindex="0"
                        on:dblclick=move |_| ctx.start_edit(&dbl_id)
                        on:keydown=|ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                            }
                        }
                    >
                        {text.clone()}
                    </span>
                }
                .into_any()
            }
        }
    };

    let checkbox_class = if completed { "checkbox checked" } else { "checkbox" };
    let aria_checked = if completed { "true" } else { "false" };
    let edit_id = id.clone();
    let delete_id = id;

    view! {
        <li class=row_class>
            <span
                class=checkbox_class
                role="checkbox"
                tabindex="0"
                aria-checked=aria_checked
                on:click=toggle_click
                on:keydown=toggle_key
            >
                <span class="checkmark">
                    <svg viewBox="0 0 16 16">
                        <polyline points="3,9 7,13 13,5"/>
                    </svg>
                </span>
            </span>

            {text_or_editor}

            <div class="todo-actions">
                <button class="action-btn" title="Edit" on:click=move |_| ctx.start_edit(&edit_id)>
                    "✏️"
                </button>
                <button class="action-btn" title="Delete" on:click=move |_| ctx.remove(&delete_id)>
                    "🗑"
                </button>
            </div>
        </li>
    }
}
