//! End-to-end tests against the real router and an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use faculty_server::config::DatabaseConfig;
use faculty_server::{db, router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn test_app() -> Router {
    let pool = db::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    router(AppState { pool })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn teacher_course_cascade_scenario() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/teachers", Some(json!({"name": "Ada"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "name": "Ada"}));

    let (status, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "CS101", "student_count": 30, "teacher_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({"id": 1, "name": "CS101", "student_count": 30, "teacher_id": 1})
    );

    let (status, body) = send(&app, "DELETE", "/teachers/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, "GET", "/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_teacher_appears_once_in_listing() {
    let app = test_app().await;
    send(&app, "POST", "/teachers", Some(json!({"name": "Alan"}))).await;

    let (_, created) = send(&app, "POST", "/teachers", Some(json!({"name": "Grace"}))).await;
    let id = created["id"].as_i64().unwrap();

    let (status, listed) = send(&app, "GET", "/teachers", None).await;
    assert_eq!(status, StatusCode::OK);
    let matches: Vec<&Value> = listed
        .as_array()
        .unwrap()
        .iter()
        .filter(|t| t["name"] == "Grace")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["id"], id);
}

#[tokio::test]
async fn course_for_unknown_teacher_is_404_and_not_stored() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "CS101", "student_count": 30, "teacher_id": 42})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Teacher not found");

    let (_, courses) = send(&app, "GET", "/courses", None).await;
    assert_eq!(courses, json!([]));
}

#[tokio::test]
async fn course_shows_up_under_its_teacher() {
    let app = test_app().await;
    send(&app, "POST", "/teachers", Some(json!({"name": "Ada"}))).await;
    send(&app, "POST", "/teachers", Some(json!({"name": "Alan"}))).await;

    let (_, course) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "Engines", "student_count": 12, "teacher_id": 1})),
    )
    .await;

    let (status, ada_courses) = send(&app, "GET", "/teachers/1/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ada_courses, json!([course]));

    let (_, alan_courses) = send(&app, "GET", "/teachers/2/courses", None).await;
    assert_eq!(alan_courses, json!([]));
}

#[tokio::test]
async fn deleting_teacher_removes_all_owned_courses() {
    let app = test_app().await;
    send(&app, "POST", "/teachers", Some(json!({"name": "Ada"}))).await;

    let mut course_ids = Vec::new();
    for name in ["A", "B", "C"] {
        let (_, course) = send(
            &app,
            "POST",
            "/courses",
            Some(json!({"name": name, "student_count": 5, "teacher_id": 1})),
        )
        .await;
        course_ids.push(course["id"].as_i64().unwrap());
    }

    let (status, _) = send(&app, "DELETE", "/teachers/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    for id in course_ids {
        let (status, body) = send(&app, "GET", &format!("/courses/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Course not found");

        let (status, _) = send(&app, "DELETE", &format!("/courses/{id}"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let (status, _) = send(&app, "GET", "/teachers/1/courses", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_unknown_records_changes_nothing() {
    let app = test_app().await;
    send(&app, "POST", "/teachers", Some(json!({"name": "Ada"}))).await;
    send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "CS101", "student_count": 30, "teacher_id": 1})),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/teachers/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = send(&app, "DELETE", "/courses/9", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, teachers) = send(&app, "GET", "/teachers", None).await;
    let (_, courses) = send(&app, "GET", "/courses", None).await;
    assert_eq!(teachers.as_array().unwrap().len(), 1);
    assert_eq!(courses.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_course_leaves_its_teacher() {
    let app = test_app().await;
    send(&app, "POST", "/teachers", Some(json!({"name": "Ada"}))).await;
    send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "CS101", "student_count": 30, "teacher_id": 1})),
    )
    .await;

    let (status, _) = send(&app, "DELETE", "/courses/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, teacher) = send(&app, "GET", "/teachers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teacher, json!({"id": 1, "name": "Ada"}));
}

#[tokio::test]
async fn invalid_bodies_are_422() {
    let app = test_app().await;

    let (status, body) = send(&app, "POST", "/teachers", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "validation_error");

    let (status, body) = send(&app, "POST", "/teachers", Some(json!({"name": "   "}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "name");

    let (status, _) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "CS101", "student_count": "thirty", "teacher_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, body) = send(
        &app,
        "POST",
        "/courses",
        Some(json!({"name": "CS101", "student_count": -1, "teacher_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "student_count");

    let (_, teachers) = send(&app, "GET", "/teachers", None).await;
    assert_eq!(teachers, json!([]));
}

#[tokio::test]
async fn non_integer_id_is_422() {
    let app = test_app().await;
    let (status, body) = send(&app, "DELETE", "/teachers/abc", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "id");
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
