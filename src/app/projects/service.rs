//! 项目管理业务服务
//!
//! 任务的增删改都采用读取整个项目文档、修改内嵌列表、整体写回的方式。
//! 并发修改同一项目时后写入者覆盖先写入者。

use tracing::info;
use uuid::Uuid;

use super::model::Project;
use crate::{
    core::error::CoreError,
    infrastructure::store::{Collection, SharedStore},
};

const PROJECT_NOT_FOUND: &str = "Project not found";
const TASK_NOT_FOUND: &str = "Task not found";

#[derive(Clone)]
pub struct ProjectService {
    projects: Collection<Project>,
}

impl ProjectService {
    pub fn new(store: SharedStore) -> Self {
        Self {
            projects: Collection::new(store),
        }
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, CoreError> {
        self.projects
            .find_all()
            .await
            .map_err(CoreError::store("Failed to fetch projects"))
    }

    pub async fn create_project(&self, name: String) -> Result<Project, CoreError> {
        let project = Project::new(name);
        self.projects
            .insert(&project)
            .await
            .map_err(CoreError::store("Failed to create project"))?;

        info!("创建项目: {} ({})", project.name, project.id);
        Ok(project)
    }

    /// 幂等删除
    pub async fn delete_project(&self, id: Uuid) -> Result<(), CoreError> {
        let removed = self
            .projects
            .delete_by_id(id)
            .await
            .map_err(CoreError::store("Failed to delete project"))?;

        if removed {
            info!("删除项目: {}", id);
        }
        Ok(())
    }

    /// 追加任务并返回更新后的项目
    pub async fn add_task(&self, project_id: Uuid, title: String) -> Result<Project, CoreError> {
        let context = "Failed to add task";
        let mut project = self.load(project_id, context).await?;
        let task_id = project.push_task(title).id;
        self.save(&project, context).await?;

        info!("项目 {} 新增任务 {}", project_id, task_id);
        Ok(project)
    }

    /// 删除任务；项目不存在时报 404，任务不存在时视为成功
    pub async fn remove_task(&self, project_id: Uuid, task_id: Uuid) -> Result<(), CoreError> {
        let context = "Failed to delete task";
        let mut project = self.load(project_id, context).await?;
        if project.remove_task(task_id) {
            self.save(&project, context).await?;
            info!("项目 {} 删除任务 {}", project_id, task_id);
        }
        Ok(())
    }

    pub async fn set_task_completed(
        &self,
        project_id: Uuid,
        task_id: Uuid,
        completed: bool,
    ) -> Result<(), CoreError> {
        let context = "Failed to update task";
        let mut project = self.load(project_id, context).await?;
        let task = project
            .task_mut(task_id)
            .ok_or_else(|| CoreError::not_found(TASK_NOT_FOUND))?;
        task.completed = completed;
        self.save(&project, context).await
    }

    async fn load(&self, id: Uuid, context: &'static str) -> Result<Project, CoreError> {
        self.projects
            .find_by_id(id)
            .await
            .map_err(CoreError::store(context))?
            .ok_or_else(|| CoreError::not_found(PROJECT_NOT_FOUND))
    }

    /// 读取和写回之间项目被删除时按 404 处理，不会重新创建
    async fn save(&self, project: &Project, context: &'static str) -> Result<(), CoreError> {
        let replaced = self
            .projects
            .replace(project)
            .await
            .map_err(CoreError::store(context))?;

        if replaced {
            Ok(())
        } else {
            Err(CoreError::not_found(PROJECT_NOT_FOUND))
        }
    }
}
