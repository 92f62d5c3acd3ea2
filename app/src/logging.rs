//! FILENAME: app/src/logging.rs
// PURPOSE: Unified logging backend for the `log` facade.
// FORMAT: seq|level|category|message

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::sync::atomic::{AtomicU64, Ordering};

// ============================================================================
// UNIFIED LOGGING SYSTEM
// ============================================================================

/// Global sequence counter, shared by every thread that logs
static LOG_SEQ: AtomicU64 = AtomicU64::new(0);

static LOGGER: UnifiedLogger = UnifiedLogger;

/// Get next sequence number
pub fn next_seq() -> u64 {
    LOG_SEQ.fetch_add(1, Ordering::SeqCst) + 1
}

/// Single-letter level code used in the log line
pub fn level_code(level: Level) -> &'static str {
    match level {
        Level::Error => "E",
        Level::Warn => "W",
        Level::Info => "I",
        Level::Debug => "D",
        Level::Trace => "T",
    }
}

pub fn format_line(seq: u64, level: Level, category: &str, message: &str) -> String {
    format!("{}|{}|{}|{}", seq, level_code(level), category, message)
}

/// Write a log line in unified format.
/// Lines go to stderr so stdout carries only the program's result.
pub fn write_log(level: Level, category: &str, message: &str) {
    let line = format_line(next_seq(), level, category, message);
    eprintln!("{}", line);
}

/// Routes `log` records into the unified format. The record target is used
/// as the category, so library code logs with `target: "PARSER"` and so on.
pub struct UnifiedLogger;

impl Log for UnifiedLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            write_log(record.level(), record.target(), &record.args().to_string());
        }
    }

    fn flush(&self) {}
}

/// Installs the unified logger. Fails if another logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}
