//! 项目管理数据模型

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{core::extract::RequestSchema, infrastructure::store::Document};

/// 项目文档，任务作为子文档内嵌保存
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// 任务只存在于所属项目的 `tasks` 中，由 (项目 id, 任务 id) 定位
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl Document for Project {
    const COLLECTION: &'static str = "projects";

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Project {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            tasks: Vec::new(),
        }
    }

    pub fn push_task(&mut self, title: String) -> &Task {
        self.tasks.push(Task {
            id: Uuid::new_v4(),
            title,
            completed: false,
        });
        &self.tasks[self.tasks.len() - 1]
    }

    pub fn task_mut(&mut self, task_id: Uuid) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == task_id)
    }

    /// 移除任务，返回是否确实删除了
    pub fn remove_task(&mut self, task_id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != task_id);
        self.tasks.len() != before
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
}

impl RequestSchema for CreateProjectRequest {
    const INVALID_MESSAGE: &'static str = "Name required";
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    #[validate(required, length(min = 1))]
    pub title: Option<String>,
}

impl RequestSchema for CreateTaskRequest {
    const INVALID_MESSAGE: &'static str = "Title required";
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(required)]
    pub completed: Option<bool>,
}

impl RequestSchema for UpdateTaskRequest {
    const INVALID_MESSAGE: &'static str = "Completed flag required";
}
