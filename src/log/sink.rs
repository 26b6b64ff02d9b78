// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! `tracing`-backed registration log.

use super::RegistrationLog;

/// Forwards registration events to the `tracing` macros.
///
/// Installing a subscriber is left to the binary; without one the events
/// are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl TracingLog {
    /// Create a new tracing log.
    pub fn new() -> Self {
        Self
    }
}

impl RegistrationLog for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!(target: "enroll::registration", "{}", message);
    }

    fn warning(&self, message: &str) {
        tracing::warn!(target: "enroll::registration", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "enroll::registration", "{}", message);
    }
}
