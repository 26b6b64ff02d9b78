// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Printable registration reports.

use console::style;
use serde::Serialize;

use crate::cli::args::OutputFormat;
use crate::log::LogEntry;
use crate::student::Student;

use super::outcome::RegistrationOutcome;

/// A registration outcome together with the student it belongs to.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationReport {
    /// The student that was checked.
    pub student: Student,
    /// What the service decided.
    pub outcome: RegistrationOutcome,
    /// When the check ran (RFC 3339).
    pub checked_at: String,
    /// Log events emitted during the check, when captured.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<LogEntry>,
}

impl RegistrationReport {
    /// Create a new report stamped with the current time.
    pub fn new(student: Student, outcome: RegistrationOutcome) -> Self {
        Self {
            student,
            outcome,
            checked_at: chrono::Local::now().to_rfc3339(),
            events: Vec::new(),
        }
    }

    /// Attach captured log events.
    pub fn with_events(mut self, events: Vec<LogEntry>) -> Self {
        self.events = events;
        self
    }

    /// Whether the student was registered.
    pub fn is_registered(&self) -> bool {
        self.outcome.is_registered()
    }

    /// One-line summary.
    pub fn summary(&self) -> String {
        match self.outcome.violation() {
            None => format!("{}: registered", self.student.name()),
            Some(violation) => format!("{}: rejected by {}", self.student.name(), violation),
        }
    }

    /// Format the report for terminal output.
    pub fn format(&self, emoji: bool) -> String {
        let (ok, fail) = if emoji { ("🎉", "🛑") } else { ("✓", "✗") };

        let mut output = match self.outcome.violation() {
            None => format!(
                "{} {} {}",
                style(ok).green().bold(),
                style(self.student.name()).bold(),
                style("registered").green()
            ),
            Some(violation) => format!(
                "{} {} {}\n  {} {} {}",
                style(fail).red().bold(),
                style(self.student.name()).bold(),
                style("rejected").red(),
                style("→").dim(),
                style(&violation.rule).red(),
                violation.reason
            ),
        };

        output.push_str(&format!(
            "\n  {}",
            style(format!(
                "{} credits, prerequisite {}, {} rule(s) evaluated",
                self.student.current_credit_load(),
                if self.student.prerequisite_satisfied() {
                    "met"
                } else {
                    "not met"
                },
                self.outcome.rules_evaluated()
            ))
            .dim()
        ));

        output
    }

    /// Print the report to stdout.
    pub fn print(&self, format: Option<OutputFormat>, emoji: bool) {
        match format {
            Some(OutputFormat::Json) => self.print_json(),
            _ => println!("{}", self.format(emoji)),
        }
    }

    /// Print in JSON format.
    fn print_json(&self) {
        println!(
            "{}",
            serde_json::to_string_pretty(self).unwrap_or_default()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::LogLevel;
    use crate::rules::RuleViolation;

    fn rejected() -> RegistrationReport {
        RegistrationReport::new(
            Student::new("Andi Gagal SKS", 25, true).unwrap(),
            RegistrationOutcome::Rejected {
                violation: RuleViolation::new("credit-load", "25 credits exceeds maximum of 24"),
                rules_evaluated: 1,
            },
        )
    }

    #[test]
    fn test_summary() {
        let report = rejected();
        assert!(!report.is_registered());
        assert_eq!(
            report.summary(),
            "Andi Gagal SKS: rejected by credit-load: 25 credits exceeds maximum of 24"
        );

        let ok = RegistrationReport::new(
            Student::new("Cindy Sukses", 18, true).unwrap(),
            RegistrationOutcome::Registered { rules_evaluated: 3 },
        );
        assert_eq!(ok.summary(), "Cindy Sukses: registered");
    }

    #[test]
    fn test_format_includes_reason() {
        let formatted = rejected().format(false);
        assert!(formatted.contains("Andi Gagal SKS"));
        assert!(formatted.contains("credit-load"));
        assert!(formatted.contains("exceeds maximum of 24"));
        assert!(formatted.contains("1 rule(s) evaluated"));
    }

    #[test]
    fn test_json_shape() {
        let report = rejected().with_events(vec![LogEntry {
            level: LogLevel::Warning,
            message: "Credit load check failed".to_string(),
        }]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["student"]["name"], "Andi Gagal SKS");
        assert_eq!(json["outcome"]["status"], "rejected");
        assert_eq!(json["events"][0]["level"], "warning");
        assert!(json["checked_at"].is_string());
    }

    #[test]
    fn test_json_omits_empty_events() {
        let json = serde_json::to_value(rejected()).unwrap();
        assert!(json.get("events").is_none());
    }
}
