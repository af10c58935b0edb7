//! Course repository
//!
//! Creation is a single `INSERT ... RETURNING`. The foreign key on
//! `course.teacher_id` is the existence check: an unknown teacher, or one
//! deleted by a concurrent request, fails the statement and is reported as
//! `NotFound`. Every write here is one statement, so it takes SQLite's
//! write lock up front and waits out the busy timeout instead of failing.

use sqlx::SqlitePool;

use super::{is_foreign_key_violation, DbError};
use crate::models::{Course, NewCourse};

/// Course repository
pub struct CourseRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CourseRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all courses in id order.
    pub async fn list(&self) -> Result<Vec<Course>, DbError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, name, student_count, teacher_id FROM course ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;
        Ok(courses)
    }

    /// Get a single course.
    pub async fn get(&self, id: i64) -> Result<Course, DbError> {
        sqlx::query_as::<_, Course>(
            "SELECT id, name, student_count, teacher_id FROM course WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::course_not_found(id))
    }

    /// Insert a course for an existing teacher.
    pub async fn create(&self, new: NewCourse) -> Result<Course, DbError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO course (name, student_count, teacher_id)
            VALUES (?, ?, ?)
            RETURNING id, name, student_count, teacher_id
            "#,
        )
        .bind(new.name.as_str())
        .bind(new.student_count.get())
        .bind(new.teacher_id)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DbError::teacher_not_found(new.teacher_id)
            } else {
                DbError::Sqlx(e)
            }
        })?;

        tracing::info!(course_id = course.id, teacher_id = course.teacher_id, "course created");
        Ok(course)
    }

    /// Delete a single course.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM course WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::course_not_found(id));
        }

        tracing::info!(course_id = id, "course deleted");
        Ok(())
    }
}
