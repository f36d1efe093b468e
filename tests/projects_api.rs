mod common;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use common::{failing_app, get_page, memory_app, send};
use doc_crud_apps::AppKind;
use serde_json::{json, Value};
use uuid::Uuid;

async fn create_project(app: &Router, name: &str) -> String {
    let (status, body) = send(app, Method::POST, "/api/projects", Some(json!({ "name": name }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn add_task(app: &Router, project_id: &str, title: &str) -> Value {
    let uri = format!("/api/projects/{project_id}/tasks");
    let (status, body) = send(app, Method::POST, &uri, Some(json!({ "title": title }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn list(app: &Router) -> Vec<Value> {
    let (status, body) = send(app, Method::GET, "/api/projects", None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array().unwrap().clone()
}

#[tokio::test]
async fn test_create_project_starts_without_tasks() {
    let app = memory_app(AppKind::Projects);
    let (status, body) = send(&app, Method::POST, "/api/projects", Some(json!({ "name": "Website" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], "Website");
    assert_eq!(body["tasks"], json!([]));

    let projects = list(&app).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], body["id"]);
}

#[tokio::test]
async fn test_project_name_is_required() {
    let app = memory_app(AppKind::Projects);
    for body in [json!({}), json!({ "name": "" }), json!({ "name": null })] {
        let (status, response) = send(&app, Method::POST, "/api/projects", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(response["message"], "Name required");
    }
    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn test_add_task_returns_updated_project() {
    let app = memory_app(AppKind::Projects);
    let id = create_project(&app, "Website").await;

    add_task(&app, &id, "Design").await;
    let project = add_task(&app, &id, "Build").await;

    let tasks = project["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0]["title"], "Design");
    assert_eq!(tasks[1]["title"], "Build");
    assert_eq!(tasks[1]["completed"], false);
    assert!(tasks[1]["id"].is_string());

    assert_eq!(list(&app).await[0]["tasks"], project["tasks"]);
}

#[tokio::test]
async fn test_add_task_validation_and_missing_project() {
    let app = memory_app(AppKind::Projects);
    let id = create_project(&app, "Website").await;

    let uri = format!("/api/projects/{id}/tasks");
    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "title": "" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Title required");

    let uri = format!("/api/projects/{}/tasks", Uuid::new_v4());
    let (status, body) = send(&app, Method::POST, &uri, Some(json!({ "title": "Orphan" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found");

    let (status, _) = send(&app, Method::POST, "/api/projects/garbage/tasks", Some(json!({ "title": "Orphan" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let projects = list(&app).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["tasks"], json!([]));
}

#[tokio::test]
async fn test_toggle_task_is_idempotent() {
    let app = memory_app(AppKind::Projects);
    let id = create_project(&app, "Website").await;
    let project = add_task(&app, &id, "Design").await;
    let task_id = project["tasks"][0]["id"].as_str().unwrap().to_string();
    let uri = format!("/api/projects/{id}/tasks/{task_id}");

    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task updated");
    let once = list(&app).await;

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::OK);
    let twice = list(&app).await;

    assert_eq!(once, twice);
    assert_eq!(twice[0]["tasks"][0]["completed"], true);

    send(&app, Method::PATCH, &uri, Some(json!({ "completed": false }))).await;
    assert_eq!(list(&app).await[0]["tasks"][0]["completed"], false);
}

#[tokio::test]
async fn test_update_task_not_found_cases() {
    let app = memory_app(AppKind::Projects);
    let id = create_project(&app, "Website").await;
    add_task(&app, &id, "Design").await;

    let uri = format!("/api/projects/{id}/tasks/{}", Uuid::new_v4());
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Task not found");

    let uri = format!("/api/projects/{}/tasks/{}", Uuid::new_v4(), Uuid::new_v4());
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found");

    let uri = format!("/api/projects/{id}/tasks/not-a-task");
    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": true }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let uri = format!("/api/projects/{id}/tasks/{}", Uuid::new_v4());
    let (status, body) = send(&app, Method::PATCH, &uri, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Completed flag required");

    let (status, _) = send(&app, Method::PATCH, &uri, Some(json!({ "completed": "yes" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_task() {
    let app = memory_app(AppKind::Projects);
    let id = create_project(&app, "Website").await;
    add_task(&app, &id, "Design").await;
    let project = add_task(&app, &id, "Build").await;
    let design_id = project["tasks"][0]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/projects/{id}/tasks/{design_id}");
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Task deleted");

    let tasks = list(&app).await[0]["tasks"].as_array().unwrap().clone();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Build");

    // 任务不存在不区分于成功
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let uri = format!("/api/projects/{}/tasks/{design_id}", Uuid::new_v4());
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Project not found");
}

#[tokio::test]
async fn test_delete_project_is_idempotent_and_drops_tasks() {
    let app = memory_app(AppKind::Projects);
    let keep = create_project(&app, "Keep").await;
    let gone = create_project(&app, "Gone").await;
    add_task(&app, &gone, "Task").await;

    let uri = format!("/api/projects/{gone}");
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Deleted");
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let projects = list(&app).await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0]["id"], keep.as_str());

    let uri = format!("/api/projects/{gone}/tasks");
    let (status, _) = send(&app, Method::POST, &uri, Some(json!({ "title": "Late" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failures_become_generic_500() {
    let app = failing_app(AppKind::Projects);
    let id = Uuid::new_v4();

    let cases = [
        (Method::GET, "/api/projects".to_string(), None, "Failed to fetch projects"),
        (Method::POST, "/api/projects".to_string(), Some(json!({ "name": "X" })), "Failed to create project"),
        (Method::DELETE, format!("/api/projects/{id}"), None, "Failed to delete project"),
        (Method::POST, format!("/api/projects/{id}/tasks"), Some(json!({ "title": "T" })), "Failed to add task"),
        (Method::DELETE, format!("/api/projects/{id}/tasks/{id}"), None, "Failed to delete task"),
        (Method::PATCH, format!("/api/projects/{id}/tasks/{id}"), Some(json!({ "completed": true })), "Failed to update task"),
    ];

    for (method, uri, body, message) in cases {
        let (status, response) = send(&app, method, &uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        assert_eq!(response, json!({ "message": message }));
    }
}

#[tokio::test]
async fn test_index_page() {
    let app = memory_app(AppKind::Projects);
    let (status, content_type, html) = get_page(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(html.contains("Project Management Tool"));
    assert!(html.contains("/api/projects"));
}
