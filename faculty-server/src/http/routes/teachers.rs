//! Teacher endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Deserialize;

use crate::db::repos::TeacherRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;
use crate::models::{Course, NewTeacher, Teacher, TeacherName};

/// Create teacher request
#[derive(Deserialize)]
pub struct CreateTeacherRequest {
    pub name: String,
}

/// GET /teachers - list all teachers
async fn list_teachers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Teacher>>, ApiError> {
    let teachers = TeacherRepo::new(&state.pool).list().await?;
    Ok(Json(teachers))
}

/// POST /teachers - create a teacher
async fn create_teacher(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateTeacherRequest>,
) -> Result<(StatusCode, Json<Teacher>), ApiError> {
    let new = NewTeacher {
        name: TeacherName::new(&req.name)?,
    };
    let teacher = TeacherRepo::new(&state.pool).create(new).await?;

    Ok((StatusCode::CREATED, Json(teacher)))
}

/// GET /teachers/{id}
async fn get_teacher(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Teacher>, ApiError> {
    let teacher = TeacherRepo::new(&state.pool).get(id).await?;
    Ok(Json(teacher))
}

/// GET /teachers/{id}/courses
async fn list_teacher_courses(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = TeacherRepo::new(&state.pool).courses(id).await?;
    Ok(Json(courses))
}

/// DELETE /teachers/{id} - also removes the teacher's courses
async fn delete_teacher(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    TeacherRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Teacher routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/teachers", get(list_teachers).post(create_teacher))
        .route("/teachers/{id}", get(get_teacher).delete(delete_teacher))
        .route("/teachers/{id}/courses", get(list_teacher_courses))
}
