//! HTTP API tests against the in-memory store.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use campus_api::routes::BODY_LIMIT;
use campus_api::{app, seed_demo_data, AppState, Store};
use serde_json::{json, Value};
use tower::ServiceExt;

fn router() -> Router {
    app(AppState::new(Store::memory(1)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
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

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

async fn post(app: &Router, uri: &str, body: &str) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

#[tokio::test]
async fn health_is_served_at_root_and_under_api() {
    let app = router();
    for uri in ["/health", "/api/health"] {
        let (status, body) = get(&app, uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "server is running" }));
    }
}

#[tokio::test]
async fn ready_and_version() {
    let app = router();
    let (status, body) = get(&app, "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "store": "memory" }));

    let (status, body) = get(&app, "/api/version").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "campus-api");
}

#[tokio::test]
async fn create_then_list_teachers() {
    let app = router();
    let (status, body) = post(
        &app,
        "/teachers/create",
        r#"{"name":"Alex Kov","email":"alex.doe@gmail.com"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "message": "teacher created successfully" }));

    post(
        &app,
        "/api/teachers/create",
        r#"{"id":50,"name":"Ulia Ykubovskay","email":"ulia.smith@gmail.com"}"#,
    )
    .await;

    let (status, body) = get(&app, "/teachers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": 1, "name": "Alex Kov", "email": "alex.doe@gmail.com" },
            { "id": 2, "name": "Ulia Ykubovskay", "email": "ulia.smith@gmail.com" }
        ])
    );
}

#[tokio::test]
async fn empty_collection_lists_as_empty_array() {
    let app = router();
    let (status, body) = get(&app, "/students").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let app = router();
    let (status, body) = post(&app, "/courses/create", "{\"title\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid JSON format" }));

    let (_, list) = get(&app, "/courses").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn course_teacher_id_is_not_validated() {
    let app = router();
    let (status, _) = post(
        &app,
        "/courses/create",
        r#"{"title":"Web Development","teacherId":404,"price":150}"#,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app, "/courses").await;
    assert_eq!(
        body,
        json!([{ "id": 1, "title": "Web Development", "teacher_id": 404, "price": 150.0 }])
    );
}

#[tokio::test]
async fn update_by_body_id() {
    let app = router();
    post(&app, "/students/create", r#"{"name":"Misha Fedotov","email":"misha@gmail.com"}"#).await;

    let (status, body) = post(
        &app,
        "/students/update",
        r#"{"id":1,"name":"Mikhail Fedotov","email":"mikhail@gmail.com"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "student updated successfully" }));

    let (_, list) = get(&app, "/students").await;
    assert_eq!(
        list,
        json!([{ "id": 1, "name": "Mikhail Fedotov", "email": "mikhail@gmail.com" }])
    );
}

#[tokio::test]
async fn update_by_query_id_wins_over_body() {
    let app = router();
    post(&app, "/teachers/create", r#"{"name":"Alex Kov"}"#).await;
    post(&app, "/teachers/create", r#"{"name":"Ulia Ykubovskay"}"#).await;

    let (status, _) = post(&app, "/teachers/update?id=2", r#"{"id":1,"name":"Ulia Y."}"#).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list[0]["name"], "Alex Kov");
    assert_eq!(list[1], json!({ "id": 2, "name": "Ulia Y.", "email": "" }));
}

#[tokio::test]
async fn update_missing_teacher_is_not_found() {
    let app = router();
    post(&app, "/teachers/create", r#"{"name":"Alex Kov"}"#).await;

    let (status, body) = post(&app, "/teachers/update", r#"{"id":999,"name":"Ghost"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "teacher with id 999 not found" }));

    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list, json!([{ "id": 1, "name": "Alex Kov", "email": "" }]));
}

#[tokio::test]
async fn delete_by_body_and_by_query() {
    let app = router();
    for name in ["A", "B", "C"] {
        post(&app, "/students/create", &format!(r#"{{"name":"{}"}}"#, name)).await;
    }

    let (status, body) = post(&app, "/students/delete", r#"{"id":2}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "student deleted successfully" }));

    let (status, _) = send(&app, Method::DELETE, "/api/students/delete?id=3", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, list) = get(&app, "/students").await;
    assert_eq!(list, json!([{ "id": 1, "name": "A", "email": "" }]));
}

#[tokio::test]
async fn delete_with_non_numeric_query_id() {
    let app = router();
    let (status, body) = send(&app, Method::POST, "/courses/delete?id=abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid ID" }));
}

#[tokio::test]
async fn update_with_non_numeric_query_id() {
    let app = router();
    post(&app, "/teachers/create", r#"{"name":"Alex Kov"}"#).await;

    let (status, body) = post(&app, "/teachers/update?id=abc", r#"{"id":1,"name":"Ghost"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid ID" }));

    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list[0]["name"], "Alex Kov");
}

#[tokio::test]
async fn repeated_query_id_is_invalid_id() {
    let app = router();
    post(&app, "/teachers/create", r#"{"name":"Alex Kov"}"#).await;

    let (status, body) = post(&app, "/teachers/update?id=1&id=2", r#"{"name":"Ghost"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid ID" }));

    let (status, body) = send(&app, Method::DELETE, "/api/teachers/delete?id=1&id=2", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid ID" }));

    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list, json!([{ "id": 1, "name": "Alex Kov", "email": "" }]));
}

#[tokio::test]
async fn oversized_body_is_json_413() {
    let app = router();
    let body = format!(r#"{{"name":"{}"}}"#, "x".repeat(BODY_LIMIT));

    // Declared length, rejected before the handler runs.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/teachers/create")
        .header("content-type", "application/json")
        .header("content-length", body.len())
        .body(Body::from(body.clone()))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({ "error": "request body too large" }));

    // No declared length, rejected while reading the body.
    for uri in ["/teachers/create", "/teachers/delete"] {
        let (status, value) = post(&app, uri, &body).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(value, json!({ "error": "request body too large" }));
    }

    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn delete_missing_id_is_not_found() {
    let app = router();
    let (status, body) = post(&app, "/courses/delete", r#"{"id":7}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "course with id 7 not found" }));
}

#[tokio::test]
async fn deleted_ids_are_retired() {
    let app = router();
    post(&app, "/teachers/create", r#"{"name":"First"}"#).await;
    post(&app, "/teachers/delete", r#"{"id":1}"#).await;
    post(&app, "/teachers/create", r#"{"name":"Second"}"#).await;

    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list, json!([{ "id": 2, "name": "Second", "email": "" }]));
}

#[tokio::test]
async fn seeded_store_serves_demo_data() {
    let store = Store::memory(1);
    seed_demo_data(&store).await.unwrap();
    let app = app(AppState::new(store));

    let (_, teachers) = get(&app, "/api/teachers").await;
    assert_eq!(teachers.as_array().unwrap().len(), 2);
    assert_eq!(teachers[1]["name"], "Ulia Ykubovskay");

    let (_, courses) = get(&app, "/api/courses").await;
    assert_eq!(courses[0]["title"], "Introduction to Programming");
    assert_eq!(courses[0]["teacher_id"], 1);
}

#[tokio::test]
async fn id_base_zero() {
    let app = app(AppState::new(Store::memory(0)));
    post(&app, "/teachers/create", r#"{"name":"Alex Kov"}"#).await;
    post(&app, "/teachers/create", r#"{"name":"Ulia Ykubovskay"}"#).await;
    let (_, list) = get(&app, "/teachers").await;
    assert_eq!(list[0]["id"], 0);
    assert_eq!(list[1]["id"], 1);
}
