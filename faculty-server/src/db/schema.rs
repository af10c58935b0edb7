//! Table definitions
//!
//! Idempotent create-if-absent, run once before the router is built.
//! There is no version table; the schema is small enough that every
//! statement is safe to re-run.

use sqlx::SqlitePool;

/// Create the `teacher` and `course` tables and their index.
pub async fn create_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps ids from being reused after deletes
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS teacher (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS course (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            student_count INTEGER NOT NULL,
            teacher_id INTEGER NOT NULL REFERENCES teacher(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_course_teacher ON course(teacher_id)")
        .execute(pool)
        .await?;

    tracing::debug!("schema ready");
    Ok(())
}
