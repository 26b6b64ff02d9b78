// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The rule contract and its failure payload.

use serde::Serialize;

use crate::student::Student;

/// Why a rule refused a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleViolation {
    /// Name of the rule that failed.
    pub rule: String,
    /// Human-readable reason.
    pub reason: String,
}

impl RuleViolation {
    /// Create a new violation.
    pub fn new(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.rule, self.reason)
    }
}

/// A single registration rule.
///
/// Rules only read the student they are given. Any configuration they need
/// (a credit ceiling, a log sink) is fixed when the rule is constructed.
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Stable identifier used in reports.
    fn name(&self) -> &str;

    /// Check the student and return a violation if the rule fails.
    fn check(&self, student: &Student) -> Option<RuleViolation>;

    /// Whether the student passes this rule.
    fn evaluate(&self, student: &Student) -> bool {
        self.check(student).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct OddCredits;

    impl Rule for OddCredits {
        fn name(&self) -> &str {
            "odd-credits"
        }

        fn check(&self, student: &Student) -> Option<RuleViolation> {
            (student.current_credit_load() % 2 == 0)
                .then(|| RuleViolation::new(self.name(), "credit load is even"))
        }
    }

    #[test]
    fn test_evaluate_follows_check() {
        let odd = Student::new("Odd", 17, true).unwrap();
        let even = Student::new("Even", 18, true).unwrap();

        assert!(OddCredits.evaluate(&odd));
        assert!(!OddCredits.evaluate(&even));
    }

    #[test]
    fn test_violation_display() {
        let violation = RuleViolation::new("prerequisite", "not completed");
        assert_eq!(violation.to_string(), "prerequisite: not completed");
    }
}
