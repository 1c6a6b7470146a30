//! Task Id Source
//!
//! Millisecond timestamps as ids, bumped so they never repeat or go backwards.

use crate::models::{Task, TaskId};

#[derive(Debug, Clone, Copy, Default)]
pub struct IdSource {
    last: u64,
}

impl IdSource {
    /// Seed from restored tasks so their numeric ids are never reissued.
    /// Values past the `i64` millisecond range cannot come from the clock and
    /// are left out of the seed.
    pub fn seeded_from(tasks: &[Task]) -> Self {
        let last = tasks
            .iter()
            .filter_map(|t| t.id.as_str().parse::<u64>().ok())
            .filter(|&n| n <= i64::MAX as u64)
            .max()
            .unwrap_or(0);
        Self { last }
    }

    /// Next id given the current clock reading in milliseconds
    pub fn next_at(&mut self, now_millis: u64) -> TaskId {
        self.last = now_millis.max(self.last.saturating_add(1));
        TaskId::new(self.last.to_string())
    }

    /// Next id from the wall clock
    pub fn next(&mut self) -> TaskId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as u64;
        self.next_at(now)
    }
}
