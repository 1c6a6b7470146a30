//! Console Logger
//!
//! `log` backend for browser apps. Records go to the devtools console on
//! wasm32 and into a bounded ring buffer that can be inspected at runtime.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Default number of lines kept in the ring buffer
pub const DEFAULT_CAPACITY: usize = 256;

static LOGGER: OnceLock<ConsoleLogger> = OnceLock::new();

/// Logger writing to the browser console and a circular buffer
pub struct ConsoleLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl ConsoleLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Snapshot of buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buf) => buf.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push_line(&self, line: String) {
        let mut buf = match self.buffer.lock() {
            Ok(buf) => buf,
            Err(poisoned) => poisoned.into_inner(),
        };
        if buf.len() == self.capacity {
            buf.pop_front();
        }
        buf.push_back(line);
    }
}

/// Format a record as `<time> [LEVEL target] message`
pub fn format_line(record: &Record) -> String {
    format!(
        "{} [{} {}] {}",
        chrono::Local::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record);
        write_console(record.level(), &line);
        self.push_line(line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(level: Level, line: &str) {
    if level <= Level::Warn {
        eprintln!("{}", line);
    }
}

/// Install the global logger. Calling it again keeps the first logger.
pub fn init(level: LevelFilter) {
    init_with_capacity(level, DEFAULT_CAPACITY);
}

pub fn init_with_capacity(level: LevelFilter, capacity: usize) {
    let logger = LOGGER.get_or_init(|| ConsoleLogger::new(level, capacity));
    if log::set_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}

/// Lines buffered by the installed logger (empty if `init` was never called)
pub fn recent() -> Vec<String> {
    LOGGER.get().map(ConsoleLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit(logger: &ConsoleLogger, level: Level, msg: &str) {
        logger.log(
            &Record::builder()
                .level(level)
                .target("test")
                .args(format_args!("{}", msg))
                .build(),
        );
    }

    #[test]
    fn test_buffer_drops_oldest_when_full() {
        let logger = ConsoleLogger::new(LevelFilter::Debug, 2);
        emit(&logger, Level::Info, "one");
        emit(&logger, Level::Info, "two");
        emit(&logger, Level::Info, "three");

        let lines = logger.recent();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("two"));
        assert!(lines[1].ends_with("three"));
    }

    #[test]
    fn test_records_above_level_are_skipped() {
        let logger = ConsoleLogger::new(LevelFilter::Warn, 8);
        emit(&logger, Level::Debug, "noise");
        emit(&logger, Level::Warn, "kept");

        let lines = logger.recent();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[WARN test] kept"));
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let logger = ConsoleLogger::new(LevelFilter::Info, 0);
        emit(&logger, Level::Info, "a");
        emit(&logger, Level::Info, "b");
        assert_eq!(logger.recent().len(), 1);
    }

    // Only test in this crate that touches the global logger
    #[test]
    fn test_second_init_keeps_first_logger() {
        init(LevelFilter::Debug);
        init(LevelFilter::Error);
        assert_eq!(log::max_level(), LevelFilter::Debug);

        log::info!(target: "init", "still recorded");
        let lines = recent();
        assert!(lines.iter().any(|l| l.contains("[INFO init] still recorded")));
    }
}
