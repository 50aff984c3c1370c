//! User-facing notices.
//!
//! Screens report outcomes here instead of alerting directly; whatever renders
//! the application decides how to show the entries.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            LogLevel::Error => tracing::error!("{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Info | LogLevel::Success => tracing::info!("{}", message),
        }
        self.lock().push(LogEntry {
            timestamp: current_time(),
            level,
            message,
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<LogEntry> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_in_order() {
        let log = ActivityLog::new();
        log.success("saved");
        log.error("failed");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Success);
        assert_eq!(entries[1].message, "failed");
        assert_eq!(log.last().map(|e| e.level), Some(LogLevel::Error));
        assert_eq!(entries[0].timestamp.len(), 8);
    }

    #[test]
    fn test_clones_share_entries() {
        let log = ActivityLog::new();
        log.clone().warning("careful");
        assert_eq!(log.entries().len(), 1);
        log.clear();
        assert!(log.last().is_none());
    }
}
