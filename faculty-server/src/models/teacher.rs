//! Teacher record and name validation

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{non_empty, ValidationError};

/// Teacher row as stored in the `teacher` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Teacher {
    pub id: i64,
    pub name: String,
}

/// Validated teacher name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeacherName(String);

impl TeacherName {
    /// Create a teacher name.
    ///
    /// Surrounding whitespace is trimmed and the result must be non-empty.
    ///
    /// # Example
    /// ```
    /// use faculty_server::models::TeacherName;
    ///
    /// assert_eq!(TeacherName::new(" Ada ").unwrap().as_str(), "Ada");
    /// assert!(TeacherName::new("").is_err());
    /// assert!(TeacherName::new("   ").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        non_empty("name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated input for inserting a teacher
#[derive(Debug, Clone)]
pub struct NewTeacher {
    pub name: TeacherName,
}
