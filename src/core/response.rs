//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 只携带一条消息的响应体，成功和失败共用
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub app: &'static str,
    pub store: &'static str,
    pub timestamp: String,
}

impl HealthResponse {
    pub fn new(status: &'static str, app: &'static str, store: &'static str) -> Self {
        Self {
            status,
            app,
            store,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
