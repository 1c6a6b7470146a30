//! App Configuration
//!
//! Static settings fixed at startup.

use log::LevelFilter;

/// Delay before the new-task highlight clears
pub const HIGHLIGHT_MS: u32 = 350;
/// Length of the row fade-out before a task is dropped
pub const REMOVE_TRANSITION_MS: u32 = 180;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub highlight_ms: u32,
    pub remove_transition_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            highlight_ms: HIGHLIGHT_MS,
            remove_transition_ms: REMOVE_TRANSITION_MS,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}
