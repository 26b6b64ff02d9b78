// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Enroll - course registration eligibility checker
///
/// Runs students through the registration rules and reports who may register.
#[derive(Parser, Debug)]
#[command(name = "enroll")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Course registration eligibility checker", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ENROLL_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check whether a single student may register
    Check(CheckArgs),

    /// Check every student listed in a roster file
    Roster(RosterArgs),

    /// Run the reference registration scenarios
    Demo,

    /// Initialize enroll configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Arguments for the check command.
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Student name
    #[arg(short, long)]
    pub name: String,

    /// Credit hours currently taken
    #[arg(long)]
    pub credits: u32,

    /// The student has completed the course prerequisites
    #[arg(short, long)]
    pub prerequisite_met: bool,

    /// Override the configured credit ceiling
    #[arg(long)]
    pub max_credits: Option<u32>,
}

/// Arguments for the roster command.
#[derive(Parser, Debug, Clone)]
pub struct RosterArgs {
    /// TOML or JSON file with a `students` list
    pub file: PathBuf,

    /// Override the configured credit ceiling
    #[arg(long)]
    pub max_credits: Option<u32>,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Whether output should be machine-readable.
    pub fn is_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_debug() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_check() {
        let args = Cli::parse_from([
            "enroll",
            "check",
            "--name",
            "Cindy Sukses",
            "--credits",
            "18",
            "--prerequisite-met",
        ]);
        if let Commands::Check(check_args) = args.command {
            assert_eq!(check_args.name, "Cindy Sukses");
            assert_eq!(check_args.credits, 18);
            assert!(check_args.prerequisite_met);
            assert!(check_args.max_credits.is_none());
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_parse_roster() {
        let args = Cli::parse_from(["enroll", "roster", "students.toml", "--max-credits", "20"]);
        if let Commands::Roster(roster_args) = args.command {
            assert_eq!(roster_args.file, PathBuf::from("students.toml"));
            assert_eq!(roster_args.max_credits, Some(20));
        } else {
            panic!("Expected Roster command");
        }
    }

    #[test]
    fn test_global_flags() {
        let args = Cli::parse_from(["enroll", "demo", "--format", "json", "--debug"]);
        assert!(args.debug);
        assert!(args.is_json());
        assert!(matches!(args.command, Commands::Demo));
    }

    #[test]
    fn test_negative_credits_rejected() {
        let result = Cli::try_parse_from(["enroll", "check", "--name", "X", "--credits", "-1"]);
        assert!(result.is_err());
    }
}
