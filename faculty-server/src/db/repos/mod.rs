//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Plain records in, plain records out
//! - Writes are single statements; constraints (foreign key, cascade) do the
//!   cross-table checks
//! - Multi-step reads share one transaction; an early return drops it
//! - Existence failures surface as `DbError::NotFound`

pub mod courses;
pub mod teachers;

pub use courses::CourseRepo;
pub use teachers::TeacherRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

impl DbError {
    pub(crate) fn teacher_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Teacher",
            id,
        }
    }

    pub(crate) fn course_not_found(id: i64) -> Self {
        Self::NotFound {
            resource: "Course",
            id,
        }
    }
}

fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
