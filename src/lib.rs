// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Enroll - course registration eligibility checker
//!
//! Decides whether a student may register for courses by running an
//! ordered list of independent rules against the student's record.
//!
//! # Features
//!
//! - **Pluggable rules**: one [`Rule`](rules::Rule) per business concern
//! - **Fail fast**: evaluation stops at the first rule that fails
//! - **Structured outcomes**: rejections carry the failing rule and its reason
//! - **Injected logging**: no global logger, easy to capture in tests
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use enroll::log::{RegistrationLog, TracingLog};
//! use enroll::registration::RegistrationService;
//! use enroll::rules::{CreditLoadRule, PrerequisiteRule, Rule};
//! use enroll::student::Student;
//!
//! let log: Arc<dyn RegistrationLog> = Arc::new(TracingLog::new());
//! let rules: Vec<Box<dyn Rule>> = vec![
//!     Box::new(CreditLoadRule::new(24, log.clone())),
//!     Box::new(PrerequisiteRule::new(log.clone())),
//! ];
//! let service = RegistrationService::new(rules, log);
//!
//! let student = Student::new("Cindy Sukses", 18, true).unwrap();
//! assert!(service.register_student(&student));
//! ```

// Module declarations
pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod registration;
pub mod rules;
pub mod student;

// Re-exports for convenience
pub use config::EnrollConfig;
pub use error::{EnrollError, Result};
pub use registration::{RegistrationOutcome, RegistrationService};
pub use rules::{Rule, RuleViolation};
pub use student::Student;

/// Version information embedded at compile time.
pub mod version {
    /// The current version of enroll.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_version_string_starts_with_version() {
            assert!(version_string().starts_with(VERSION));
        }
    }
}
