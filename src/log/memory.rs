// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! In-memory registration log.

use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use super::{LogLevel, RegistrationLog};

/// A single captured log event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Registration log that keeps every event in memory.
///
/// Used to assert on emitted messages in tests, and by the CLI to attach
/// the event trail to JSON reports.
#[derive(Debug, Default)]
pub struct MemoryLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.lock().clone()
    }

    /// Messages captured at the given level.
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Remove and return all captured entries.
    pub fn drain(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.lock())
    }

    /// Number of captured entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been captured yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogEntry>> {
        // A panic while holding the lock cannot leave the Vec half-written.
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.lock().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl RegistrationLog for MemoryLog {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(LogLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_memory_log_captures_in_order() {
        let log = MemoryLog::new();
        assert!(log.is_empty());

        log.info("first");
        log.warning("second");

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, LogLevel::Warning);
        assert_eq!(log.messages(LogLevel::Info), vec!["first".to_string()]);
    }

    #[test]
    fn test_drain_empties_log() {
        let log = MemoryLog::new();
        log.error("boom");
        assert_eq!(log.drain().len(), 1);
        assert!(log.is_empty());
    }

    #[test]
    fn test_concurrent_writes() {
        let log = Arc::new(MemoryLog::new());

        std::thread::scope(|scope| {
            for t in 0..4 {
                let log = Arc::clone(&log);
                scope.spawn(move || {
                    for i in 0..25 {
                        log.info(&format!("thread {t} event {i}"));
                    }
                });
            }
        });

        assert_eq!(log.len(), 100);
    }
}
