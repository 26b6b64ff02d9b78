// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! The student record validated by registration rules.

use serde::{Deserialize, Serialize};

use crate::error::StudentError;

/// A student applying to register for courses.
///
/// Fields are private so that a record, once built, cannot be changed by
/// the rules that inspect it. A new attempt needs a new `Student`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    name: String,
    current_credit_load: u32,
    prerequisite_satisfied: bool,
}

/// Unchecked wire shape of a student, as it appears in roster files.
#[derive(Debug, Deserialize)]
struct StudentRecord {
    name: String,
    current_credit_load: u32,
    #[serde(default)]
    prerequisite_satisfied: bool,
}

impl Student {
    /// Create a new student record.
    ///
    /// The name is trimmed and must not be empty.
    pub fn new(
        name: impl Into<String>,
        current_credit_load: u32,
        prerequisite_satisfied: bool,
    ) -> Result<Self, StudentError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(StudentError::EmptyName);
        }

        Ok(Self {
            name,
            current_credit_load,
            prerequisite_satisfied,
        })
    }

    /// The student's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Credit hours the student is currently taking.
    pub fn current_credit_load(&self) -> u32 {
        self.current_credit_load
    }

    /// Whether the course prerequisites have been completed.
    pub fn prerequisite_satisfied(&self) -> bool {
        self.prerequisite_satisfied
    }
}

impl TryFrom<StudentRecord> for Student {
    type Error = StudentError;

    fn try_from(record: StudentRecord) -> Result<Self, Self::Error> {
        Student::new(
            record.name,
            record.current_credit_load,
            record.prerequisite_satisfied,
        )
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} credits)", self.name, self.current_credit_load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student() {
        let student = Student::new("Cindy Sukses", 18, true).unwrap();
        assert_eq!(student.name(), "Cindy Sukses");
        assert_eq!(student.current_credit_load(), 18);
        assert!(student.prerequisite_satisfied());
    }

    #[test]
    fn test_name_is_trimmed() {
        let student = Student::new("  Budi  ", 18, false).unwrap();
        assert_eq!(student.name(), "Budi");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            Student::new("   ", 10, true),
            Err(StudentError::EmptyName)
        ));
    }

    #[test]
    fn test_deserialize_runs_validation() {
        let ok: Student =
            serde_json::from_str(r#"{"name":"Andi","current_credit_load":25}"#).unwrap();
        assert!(!ok.prerequisite_satisfied());

        let err = serde_json::from_str::<Student>(r#"{"name":"","current_credit_load":1}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_display() {
        let student = Student::new("Edge", 24, true).unwrap();
        assert_eq!(student.to_string(), "Edge (24 credits)");
    }
}
