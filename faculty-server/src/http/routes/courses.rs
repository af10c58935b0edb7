//! Course endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::db::repos::CourseRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Course, CourseName, NewCourse, StudentCount};

/// Create course request
#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub student_count: i64,
    pub teacher_id: i64,
}

impl TryFrom<CreateCourseRequest> for NewCourse {
    type Error = crate::models::ValidationError;

    fn try_from(req: CreateCourseRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: CourseName::new(&req.name)?,
            student_count: StudentCount::new(req.student_count)?,
            teacher_id: req.teacher_id,
        })
    }
}

/// GET /courses - list all courses
async fn list_courses(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = CourseRepo::new(&state.pool).list().await?;
    Ok(Json(courses))
}

/// POST /courses - create a course for an existing teacher
async fn create_course(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let new = NewCourse::try_from(req)?;
    let course = CourseRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// GET /courses/{id}
async fn get_course(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Course>, ApiError> {
    let course = CourseRepo::new(&state.pool).get(id).await?;
    Ok(Json(course))
}

/// DELETE /courses/{id}
async fn delete_course(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    CourseRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", get(get_course).delete(delete_course))
}
