//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::MessageResponse;
use crate::infrastructure::store::StoreError;

/// 核心错误类型
///
/// 所有错误在路由边界统一转换为 `{ "message": ... }` 响应体。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// 存储层失败，对外只暴露路由相关的通用消息
    #[error("{context}")]
    Store {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl CoreError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        CoreError::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        CoreError::NotFound(message.into())
    }

    /// 用于 `map_err`，把存储错误包装成带上下文的 500
    pub fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| CoreError::Store { context, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let CoreError::Store { context, source } = &self {
            error!(error = %source, "{context}");
        }

        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
