//! 项目管理处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Json},
};
use uuid::Uuid;

use super::{
    model::{CreateProjectRequest, CreateTaskRequest, Project, UpdateTaskRequest},
    page::INDEX_HTML,
    service::ProjectService,
};
use crate::{
    app::parse_id,
    core::{error::CoreError, extract::ValidatedJson, response::MessageResponse},
};

#[derive(Clone)]
pub struct AppState {
    pub project_service: ProjectService,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<Project>>, CoreError> {
    let projects = state.project_service.list_projects().await?;
    Ok(Json(projects))
}

pub async fn create_project(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProjectRequest>,
) -> Result<(StatusCode, Json<Project>), CoreError> {
    let name = payload.name.ok_or_else(|| CoreError::bad_request("Name required"))?;
    let project = state.project_service.create_project(name).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, CoreError> {
    if let Some(id) = parse_id(&id) {
        state.project_service.delete_project(id).await?;
    }
    Ok(Json(MessageResponse::new("Deleted")))
}

pub async fn add_task(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ValidatedJson(payload): ValidatedJson<CreateTaskRequest>,
) -> Result<(StatusCode, Json<Project>), CoreError> {
    let title = payload.title.ok_or_else(|| CoreError::bad_request("Title required"))?;
    let project_id = project_id_or_not_found(&project_id)?;
    let project = state.project_service.add_task(project_id, title).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
) -> Result<Json<MessageResponse>, CoreError> {
    let project_id = project_id_or_not_found(&project_id)?;
    state
        .project_service
        .remove_task(project_id, task_id_or_nil(&task_id))
        .await?;
    Ok(Json(MessageResponse::new("Task deleted")))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path((project_id, task_id)): Path<(String, String)>,
    ValidatedJson(payload): ValidatedJson<UpdateTaskRequest>,
) -> Result<Json<MessageResponse>, CoreError> {
    let completed = payload
        .completed
        .ok_or_else(|| CoreError::bad_request("Completed flag required"))?;
    let project_id = project_id_or_not_found(&project_id)?;

    state
        .project_service
        .set_task_completed(project_id, task_id_or_nil(&task_id), completed)
        .await?;
    Ok(Json(MessageResponse::new("Task updated")))
}

fn project_id_or_not_found(raw: &str) -> Result<Uuid, CoreError> {
    parse_id(raw).ok_or_else(|| CoreError::not_found("Project not found"))
}

/// 非法的任务 id 不会匹配任何任务，但仍要先确认项目存在
fn task_id_or_nil(raw: &str) -> Uuid {
    parse_id(raw).unwrap_or(Uuid::nil())
}
