// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registration service coordinating rule evaluation.

use std::sync::Arc;

use crate::log::RegistrationLog;
use crate::rules::Rule;
use crate::student::Student;

use super::outcome::RegistrationOutcome;

/// Runs an injected, ordered list of rules against students.
///
/// The service never looks at student fields itself. It holds no state
/// between calls, so one instance can serve many threads at once.
#[derive(Debug)]
pub struct RegistrationService {
    rules: Vec<Box<dyn Rule>>,
    log: Arc<dyn RegistrationLog>,
}

impl RegistrationService {
    /// Create a new service over the given rules.
    ///
    /// Rules run in the order given. An empty list accepts every student.
    pub fn new(rules: Vec<Box<dyn Rule>>, log: Arc<dyn RegistrationLog>) -> Self {
        Self { rules, log }
    }

    /// The rules this service runs, in order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Number of configured rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are configured.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Register a student, stopping at the first failing rule.
    pub fn register(&self, student: &Student) -> RegistrationOutcome {
        self.log
            .info(&format!("Processing registration for {}", student.name()));

        for (index, rule) in self.rules.iter().enumerate() {
            tracing::debug!("Evaluating rule '{}' for {}", rule.name(), student.name());

            if let Some(violation) = rule.check(student) {
                self.log.error(&format!(
                    "Registration failed for {}: rule '{}' violated ({})",
                    student.name(),
                    violation.rule,
                    violation.reason
                ));
                return RegistrationOutcome::Rejected {
                    violation,
                    rules_evaluated: index + 1,
                };
            }
        }

        self.log
            .info(&format!("Registration succeeded for {}", student.name()));
        RegistrationOutcome::Registered {
            rules_evaluated: self.rules.len(),
        }
    }

    /// Register a student and return only whether it succeeded.
    pub fn register_student(&self, student: &Student) -> bool {
        self.register(student).is_registered()
    }
}
