// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Loading batches of students from TOML or JSON files.

use std::path::Path;

use serde::Deserialize;

use crate::error::{EnrollError, Result, StudentError};

use super::Student;

/// File formats accepted for rosters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    Toml,
    Json,
}

impl RosterFormat {
    /// Pick a format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_lowercase().as_str() {
            "toml" => Some(RosterFormat::Toml),
            "json" => Some(RosterFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    students: Vec<Student>,
}

/// Load a roster from a file, choosing the format by extension.
pub fn load_roster(path: &Path) -> Result<Vec<Student>> {
    tracing::debug!("Loading roster from: {:?}", path);

    let format = RosterFormat::from_path(path).ok_or_else(|| {
        EnrollError::Student(StudentError::UnsupportedFormat {
            path: path.to_path_buf(),
        })
    })?;

    let content = std::fs::read_to_string(path)?;
    parse_roster(&content, format)
}

/// Parse a roster document.
///
/// Students keep the order they appear in the document.
pub fn parse_roster(content: &str, format: RosterFormat) -> Result<Vec<Student>> {
    let roster: RosterFile = match format {
        RosterFormat::Toml => toml::from_str(content).map_err(|e| StudentError::ParseError {
            message: format!("Failed to parse TOML: {}", e),
        })?,
        RosterFormat::Json => {
            serde_json::from_str(content).map_err(|e| StudentError::ParseError {
                message: format!("Failed to parse JSON: {}", e),
            })?
        }
    };

    tracing::debug!("Loaded {} student(s)", roster.students.len());
    Ok(roster.students)
}
