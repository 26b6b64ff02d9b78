// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Result of a single registration attempt.

use serde::Serialize;

use crate::rules::RuleViolation;

/// Outcome of running the rule list against one student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RegistrationOutcome {
    /// Every rule passed.
    Registered { rules_evaluated: usize },
    /// A rule failed; rules after it were never run.
    Rejected {
        violation: RuleViolation,
        rules_evaluated: usize,
    },
}

impl RegistrationOutcome {
    /// Whether the student may register.
    pub fn is_registered(&self) -> bool {
        matches!(self, RegistrationOutcome::Registered { .. })
    }

    /// The violation that stopped the registration, if any.
    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            RegistrationOutcome::Registered { .. } => None,
            RegistrationOutcome::Rejected { violation, .. } => Some(violation),
        }
    }

    /// Number of rules that were run, including the failing one.
    pub fn rules_evaluated(&self) -> usize {
        match self {
            RegistrationOutcome::Registered { rules_evaluated }
            | RegistrationOutcome::Rejected {
                rules_evaluated, ..
            } => *rules_evaluated,
        }
    }
}

impl From<&RegistrationOutcome> for bool {
    fn from(outcome: &RegistrationOutcome) -> Self {
        outcome.is_registered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_outcome() {
        let outcome = RegistrationOutcome::Registered { rules_evaluated: 3 };
        assert!(outcome.is_registered());
        assert!(outcome.violation().is_none());
        assert_eq!(outcome.rules_evaluated(), 3);
        assert!(bool::from(&outcome));
    }

    #[test]
    fn test_rejected_outcome() {
        let outcome = RegistrationOutcome::Rejected {
            violation: RuleViolation::new("credit-load", "25 credits exceeds maximum of 24"),
            rules_evaluated: 1,
        };
        assert!(!outcome.is_registered());
        assert_eq!(outcome.violation().unwrap().rule, "credit-load");
        assert_eq!(outcome.rules_evaluated(), 1);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = RegistrationOutcome::Rejected {
            violation: RuleViolation::new("prerequisite", "missing"),
            rules_evaluated: 2,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["violation"]["rule"], "prerequisite");
        assert_eq!(json["rules_evaluated"], 2);
    }
}
