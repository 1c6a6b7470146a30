//! UI Components
//!
//! Leptos components bound to the task list controller.

mod filter_bar;
mod stats_panel;
mod task_input_bar;
mod task_item;
mod task_list;
mod theme_toggle;

pub use filter_bar::FilterBar;
pub use stats_panel::StatsPanel;
pub use task_input_bar::TaskInputBar;
pub use task_item::TaskItem;
pub use task_list::TaskList;
pub use theme_toggle::ThemeToggle;
