// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Built-in registration rules.

use std::sync::Arc;

use crate::config::RulesConfig;
use crate::log::RegistrationLog;
use crate::student::Student;

use super::rule::{Rule, RuleViolation};

/// Rejects students taking more credit hours than the ceiling allows.
#[derive(Debug, Clone)]
pub struct CreditLoadRule {
    max_credits: u32,
    log: Arc<dyn RegistrationLog>,
}

impl CreditLoadRule {
    /// Default credit-hour ceiling per term.
    pub const DEFAULT_MAX_CREDITS: u32 = 24;

    /// Create a rule with the given ceiling. A load equal to the ceiling passes.
    pub fn new(max_credits: u32, log: Arc<dyn RegistrationLog>) -> Self {
        Self { max_credits, log }
    }

    /// The configured ceiling.
    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }
}

impl Rule for CreditLoadRule {
    fn name(&self) -> &str {
        "credit-load"
    }

    fn check(&self, student: &Student) -> Option<RuleViolation> {
        let load = student.current_credit_load();

        if load > self.max_credits {
            let reason = format!(
                "{} credits exceeds maximum of {}",
                load, self.max_credits
            );
            self.log.warning(&format!(
                "Credit load check failed for {}: {}",
                student.name(),
                reason
            ));
            return Some(RuleViolation::new(self.name(), reason));
        }

        self.log.info(&format!(
            "Credit load check passed for {} ({} credits)",
            student.name(),
            load
        ));
        None
    }
}

/// Rejects students who have not completed the course prerequisites.
#[derive(Debug, Clone)]
pub struct PrerequisiteRule {
    log: Arc<dyn RegistrationLog>,
}

impl PrerequisiteRule {
    pub fn new(log: Arc<dyn RegistrationLog>) -> Self {
        Self { log }
    }
}

impl Rule for PrerequisiteRule {
    fn name(&self) -> &str {
        "prerequisite"
    }

    fn check(&self, student: &Student) -> Option<RuleViolation> {
        if !student.prerequisite_satisfied() {
            self.log.warning(&format!(
                "Prerequisite check failed for {}",
                student.name()
            ));
            return Some(RuleViolation::new(
                self.name(),
                format!("{} has not completed the prerequisite courses", student.name()),
            ));
        }

        self.log
            .info(&format!("Prerequisite check passed for {}", student.name()));
        None
    }
}

/// Tuition payment check.
///
/// There is no payment ledger to consult yet, so every student passes.
#[derive(Debug, Clone)]
pub struct TuitionPaymentRule {
    log: Arc<dyn RegistrationLog>,
}

impl TuitionPaymentRule {
    pub fn new(log: Arc<dyn RegistrationLog>) -> Self {
        Self { log }
    }
}

impl Rule for TuitionPaymentRule {
    fn name(&self) -> &str {
        "tuition-payment"
    }

    fn check(&self, student: &Student) -> Option<RuleViolation> {
        self.log.info(&format!(
            "Tuition payment check passed for {}",
            student.name()
        ));
        None
    }
}

/// Build the standard rule list: credit load, prerequisite, tuition payment.
pub fn standard_rules(config: &RulesConfig, log: Arc<dyn RegistrationLog>) -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(CreditLoadRule::new(config.max_credit_load, Arc::clone(&log))),
        Box::new(PrerequisiteRule::new(Arc::clone(&log))),
        Box::new(TuitionPaymentRule::new(log)),
    ]
}
