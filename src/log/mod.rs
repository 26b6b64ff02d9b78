// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Logging capability injected into rules and the registration service.
//!
//! Nothing in the rule pipeline talks to a global logger. Callers hand an
//! `Arc<dyn RegistrationLog>` to every rule and to the service when they
//! build them, which keeps the pipeline testable and free of hidden state.

mod memory;
mod sink;

pub use memory::{LogEntry, MemoryLog};
pub use sink::TracingLog;

use serde::Serialize;

/// Severity of a registration log event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Get the string representation of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sink for human-readable registration events.
///
/// Implementations must be safe to call from several registrations running
/// on different threads at once.
pub trait RegistrationLog: std::fmt::Debug + Send + Sync {
    /// Record an informational event.
    fn info(&self, message: &str);

    /// Record a warning, typically a rule that did not pass.
    fn warning(&self, message: &str);

    /// Record an error, typically a rejected registration.
    fn error(&self, message: &str);

    /// Record an event at the given level.
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Info => self.info(message),
            LogLevel::Warning => self.warning(message),
            LogLevel::Error => self.error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dispatches_by_level() {
        let log = MemoryLog::new();
        log.log(LogLevel::Info, "a");
        log.log(LogLevel::Warning, "b");
        log.log(LogLevel::Error, "c");

        let levels: Vec<LogLevel> = log.entries().iter().map(|e| e.level).collect();
        assert_eq!(
            levels,
            vec![LogLevel::Info, LogLevel::Warning, LogLevel::Error]
        );
    }

    #[test]
    fn test_level_display() {
        assert_eq!(LogLevel::Warning.to_string(), "warning");
    }
}
