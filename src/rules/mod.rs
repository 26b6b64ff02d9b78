// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registration rules.
//!
//! Each rule covers one business concern and knows nothing about the
//! other rules or about the service that runs them. New rules are added
//! by implementing [`Rule`] and placing an instance in the list handed to
//! [`RegistrationService`](crate::registration::RegistrationService).

mod builtin;
mod rule;

pub use builtin::{standard_rules, CreditLoadRule, PrerequisiteRule, TuitionPaymentRule};
pub use rule::{Rule, RuleViolation};
