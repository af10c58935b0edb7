//! Teacher repository
//!
//! - create: INSERT ... RETURNING, no read-back query
//! - delete: courses go with the teacher through ON DELETE CASCADE

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{Course, NewTeacher, Teacher};

/// Teacher repository
pub struct TeacherRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TeacherRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all teachers in id order.
    pub async fn list(&self) -> Result<Vec<Teacher>, DbError> {
        let teachers = sqlx::query_as::<_, Teacher>("SELECT id, name FROM teacher ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(teachers)
    }

    /// Get a single teacher.
    pub async fn get(&self, id: i64) -> Result<Teacher, DbError> {
        sqlx::query_as::<_, Teacher>("SELECT id, name FROM teacher WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::teacher_not_found(id))
    }

    /// Insert a teacher and return it with its assigned id.
    pub async fn create(&self, new: NewTeacher) -> Result<Teacher, DbError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            "INSERT INTO teacher (name) VALUES (?) RETURNING id, name",
        )
        .bind(new.name.as_str())
        .fetch_one(self.pool)
        .await?;

        tracing::info!(teacher_id = teacher.id, "teacher created");
        Ok(teacher)
    }

    /// Courses taught by a teacher, in id order.
    ///
    /// The existence check and the listing read one snapshot, so an unknown
    /// teacher is distinguishable from one with no courses. The transaction
    /// only reads and never needs the write lock.
    pub async fn courses(&self, id: i64) -> Result<Vec<Course>, DbError> {
        let mut tx = self.pool.begin().await?;

        let found: Option<i64> = sqlx::query_scalar("SELECT id FROM teacher WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if found.is_none() {
            return Err(DbError::teacher_not_found(id));
        }

        let courses = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, name, student_count, teacher_id
            FROM course
            WHERE teacher_id = ?
            ORDER BY id
            "#,
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(courses)
    }

    /// Delete a teacher and, by cascade, every course it owns.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM teacher WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(DbError::teacher_not_found(id));
        }

        tracing::info!(teacher_id = id, "teacher deleted");
        Ok(())
    }
}
