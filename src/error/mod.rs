// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for the enroll application.
//!
//! Rule violations are ordinary registration outcomes and never show up
//! here. These types cover what can actually go wrong around the rule
//! pipeline: reading configuration, loading student records, and I/O.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for enroll operations.
#[derive(Error, Debug)]
pub enum EnrollError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Student record errors
    #[error("Student error: {0}")]
    Student(#[from] StudentError),

    // Registration errors
    #[error("Registration error: {0}")]
    Registration(#[from] RegistrationError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while building or loading student records.
#[derive(Error, Debug)]
pub enum StudentError {
    #[error("Student name must not be empty")]
    EmptyName,

    #[error("Failed to parse student records: {message}")]
    ParseError { message: String },

    #[error("Unsupported roster format: {path}")]
    UnsupportedFormat { path: PathBuf },
}

/// Errors surfaced when a registration run has to be reported as failed.
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("{count} student(s) were rejected")]
    Rejected { count: usize },
}

/// Result type alias for enroll operations.
pub type Result<T> = std::result::Result<T, EnrollError>;

/// Extension trait for adding context to errors.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: std::error::Error + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| EnrollError::WithContext {
            context: context.into(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotFound {
            path: PathBuf::from("/path/to/enroll.toml"),
        };
        assert!(err.to_string().contains("/path/to/enroll.toml"));
    }

    #[test]
    fn test_enroll_error_from_student_error() {
        let err: EnrollError = StudentError::EmptyName.into();
        assert!(err.to_string().starts_with("Student error"));
    }

    #[test]
    fn test_rejected_display() {
        let err = RegistrationError::Rejected { count: 2 };
        assert_eq!(err.to_string(), "2 student(s) were rejected");
    }

    #[test]
    fn test_result_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = io.context("roster").unwrap_err();
        assert_eq!(err.to_string(), "roster: missing");
    }
}
