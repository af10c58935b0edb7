//! Course record and input validation

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{non_empty, ValidationError};

/// Course row as stored in the `course` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub student_count: i64,
    pub teacher_id: i64,
}

/// Validated course name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseName(String);

impl CourseName {
    /// Create a course name (trimmed, non-empty).
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        non_empty("name", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Enrolled student count, never negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentCount(i64);

impl StudentCount {
    pub fn new(n: i64) -> Result<Self, ValidationError> {
        if n < 0 {
            return Err(ValidationError::Negative {
                field: "student_count",
            });
        }
        Ok(Self(n))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

/// Validated input for inserting a course.
///
/// `teacher_id` is not checked here; the repository verifies it inside
/// the insert transaction.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: CourseName,
    pub student_count: StudentCount,
    pub teacher_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_count_bounds() {
        assert_eq!(StudentCount::new(0).unwrap().get(), 0);
        assert_eq!(StudentCount::new(30).unwrap().get(), 30);
        assert_eq!(
            StudentCount::new(-1).unwrap_err(),
            ValidationError::Negative {
                field: "student_count"
            }
        );
    }

    #[test]
    fn course_name_trimmed() {
        assert_eq!(CourseName::new(" CS101 ").unwrap().as_str(), "CS101");
        assert!(CourseName::new("").is_err());
    }

    #[test]
    fn serializes_all_fields() {
        let course = Course {
            id: 1,
            name: "CS101".into(),
            student_count: 30,
            teacher_id: 1,
        };
        assert_eq!(
            serde_json::to_value(&course).unwrap(),
            serde_json::json!({"id": 1, "name": "CS101", "student_count": 30, "teacher_id": 1})
        );
    }
}
