//! 项目管理：项目及其内嵌任务

pub mod handler;
pub mod model;
mod page;
pub mod service;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::infrastructure::store::SharedStore;
use handler::AppState;
use service::ProjectService;

pub fn router(store: SharedStore) -> Router {
    let state = AppState {
        project_service: ProjectService::new(store),
    };

    Router::new()
        .route("/", get(handler::index))
        .route(
            "/api/projects",
            get(handler::list_projects).post(handler::create_project),
        )
        .route("/api/projects/:id", delete(handler::delete_project))
        .route("/api/projects/:id/tasks", post(handler::add_task))
        .route(
            "/api/projects/:id/tasks/:task_id",
            delete(handler::delete_task).patch(handler::update_task),
        )
        .with_state(state)
}
