// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::sync::Arc;

use crate::config::EnrollConfig;
use crate::error::{ConfigError, EnrollError, RegistrationError, Result, ResultExt};
use crate::log::{MemoryLog, RegistrationLog, TracingLog};
use crate::registration::{RegistrationReport, RegistrationService};
use crate::rules::{standard_rules, CreditLoadRule, PrerequisiteRule, Rule, TuitionPaymentRule};
use crate::student::{load_roster, Student};

use super::args::{CheckArgs, Cli, Commands, InitArgs, RosterArgs};

/// Load the configuration selected by the CLI flags.
pub fn load_config(cli: &Cli) -> Result<EnrollConfig> {
    if let Some(config_path) = &cli.config {
        EnrollConfig::load_from(config_path)
    } else {
        EnrollConfig::load()
    }
}

/// Run the CLI with the given arguments and configuration.
pub fn run(cli: Cli, config: EnrollConfig) -> Result<()> {
    if !config.ui.color {
        console::set_colors_enabled(false);
    }

    // Dispatch to the appropriate command handler
    match cli.command.clone() {
        Commands::Check(args) => run_check(&cli, config, args),
        Commands::Roster(args) => run_roster(&cli, config, args),
        Commands::Demo => run_demo(&cli, &config),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Where registration events go for this invocation.
///
/// JSON output captures events in memory so they can be embedded in each
/// report; text output streams them through `tracing`.
struct EventSink {
    log: Arc<dyn RegistrationLog>,
    captured: Option<Arc<MemoryLog>>,
}

impl EventSink {
    fn for_cli(cli: &Cli) -> Self {
        if cli.is_json() {
            let memory = Arc::new(MemoryLog::new());
            Self {
                log: memory.clone(),
                captured: Some(memory),
            }
        } else {
            Self {
                log: Arc::new(TracingLog::new()),
                captured: None,
            }
        }
    }

    fn report(&self, student: Student, service: &RegistrationService) -> RegistrationReport {
        let outcome = service.register(&student);
        let report = RegistrationReport::new(student, outcome);
        match &self.captured {
            Some(memory) => report.with_events(memory.drain()),
            None => report,
        }
    }
}

/// Apply a `--max-credits` override and re-validate.
fn apply_max_credits(config: &mut EnrollConfig, max_credits: Option<u32>) -> Result<()> {
    if let Some(max) = max_credits {
        config.rules.max_credit_load = max;
        config.validate().map_err(|_| {
            EnrollError::Config(ConfigError::InvalidValue {
                key: "--max-credits".to_string(),
                message: "must be greater than zero".to_string(),
            })
        })?;
    }
    Ok(())
}

/// Run the check command.
fn run_check(cli: &Cli, mut config: EnrollConfig, args: CheckArgs) -> Result<()> {
    tracing::debug!("Running check command with args: {:?}", args);

    apply_max_credits(&mut config, args.max_credits)?;

    let student = Student::new(args.name, args.credits, args.prerequisite_met)?;
    let sink = EventSink::for_cli(cli);
    let service = RegistrationService::new(
        standard_rules(&config.rules, sink.log.clone()),
        sink.log.clone(),
    );

    let report = sink.report(student, &service);
    report.print(cli.format, config.ui.emoji);

    if report.is_registered() {
        Ok(())
    } else {
        Err(RegistrationError::Rejected { count: 1 }.into())
    }
}

/// Run the roster command.
fn run_roster(cli: &Cli, mut config: EnrollConfig, args: RosterArgs) -> Result<()> {
    tracing::debug!("Running roster command with args: {:?}", args);

    apply_max_credits(&mut config, args.max_credits)?;

    let students = load_roster(&args.file)?;
    let sink = EventSink::for_cli(cli);
    let service = RegistrationService::new(
        standard_rules(&config.rules, sink.log.clone()),
        sink.log.clone(),
    );

    let reports: Vec<RegistrationReport> = students
        .into_iter()
        .map(|student| sink.report(student, &service))
        .collect();

    if cli.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("roster")?
        );
    } else {
        for report in &reports {
            report.print(cli.format, config.ui.emoji);
        }
    }

    let rejected = reports.iter().filter(|r| !r.is_registered()).count();
    if rejected > 0 {
        Err(RegistrationError::Rejected { count: rejected }.into())
    } else {
        Ok(())
    }
}

/// Run the demo command.
///
/// The first service knows only the credit-load and prerequisite rules.
/// The second one adds the tuition rule without touching the others.
fn run_demo(cli: &Cli, config: &EnrollConfig) -> Result<()> {
    tracing::debug!("Running demo command");

    let sink = EventSink::for_cli(cli);
    let credit_rule = || -> Box<dyn Rule> {
        Box::new(CreditLoadRule::new(
            config.rules.max_credit_load,
            sink.log.clone(),
        ))
    };
    let prerequisite_rule =
        || -> Box<dyn Rule> { Box::new(PrerequisiteRule::new(sink.log.clone())) };

    let initial =
        RegistrationService::new(vec![credit_rule(), prerequisite_rule()], sink.log.clone());
    let extended = RegistrationService::new(
        vec![
            credit_rule(),
            prerequisite_rule(),
            Box::new(TuitionPaymentRule::new(sink.log.clone())),
        ],
        sink.log.clone(),
    );

    let reports = vec![
        sink.report(Student::new("Andi Gagal SKS", 25, true)?, &initial),
        sink.report(Student::new("Budi Gagal Prasyarat", 18, false)?, &initial),
        sink.report(Student::new("Cindy Sukses", 18, true)?, &extended),
    ];

    if cli.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("demo")?
        );
    } else {
        for report in &reports {
            report.print(cli.format, config.ui.emoji);
        }
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = std::path::Path::new("enroll.toml");

    if config_path.exists() && !args.force {
        return Err(EnrollError::WithContext {
            context: "init".to_string(),
            message: "Configuration file already exists. Use --force to overwrite.".to_string(),
        });
    }

    std::fs::write(config_path, example_config()).context("Failed to write configuration")?;

    println!("✓ Created enroll.toml");

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("enroll {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_apply_max_credits() {
        let mut config = EnrollConfig::default();
        apply_max_credits(&mut config, Some(18)).unwrap();
        assert_eq!(config.rules.max_credit_load, 18);

        apply_max_credits(&mut config, None).unwrap();
        assert_eq!(config.rules.max_credit_load, 18);

        assert!(apply_max_credits(&mut config, Some(0)).is_err());
    }

    #[test]
    fn test_json_sink_captures_events() {
        let cli = Cli::parse_from(["enroll", "demo", "--format", "json"]);
        let sink = EventSink::for_cli(&cli);
        let service = RegistrationService::new(
            standard_rules(&EnrollConfig::default().rules, sink.log.clone()),
            sink.log.clone(),
        );

        let report = sink.report(Student::new("Cindy Sukses", 18, true).unwrap(), &service);
        assert!(report.is_registered());
        // start, three rule passes, final summary
        assert_eq!(report.events.len(), 5);

        let next = sink.report(Student::new("Andi Gagal SKS", 25, true).unwrap(), &service);
        assert_eq!(next.events.len(), 3);
    }

    #[test]
    fn test_text_sink_does_not_capture() {
        let cli = Cli::parse_from(["enroll", "demo"]);
        let sink = EventSink::for_cli(&cli);
        assert!(sink.captured.is_none());
    }
}
