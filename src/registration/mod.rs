// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Registration pipeline.
//!
//! The [`RegistrationService`] runs an ordered list of rules against a
//! student and stops at the first one that fails.

mod outcome;
mod report;
mod service;

pub use outcome::RegistrationOutcome;
pub use report::RegistrationReport;
pub use service::RegistrationService;
