//! 请求体提取与校验
//!
//! 每个资源的请求结构通过 `#[derive(Validate)]` 声明必填字段和取值约束，
//! [`ValidatedJson`] 在进入处理器之前统一完成解析和校验。

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::Validate;

use super::error::CoreError;

/// 请求体校验失败时返回给客户端的消息
pub trait RequestSchema: Validate {
    const INVALID_MESSAGE: &'static str;
}

/// 已通过校验的 JSON 请求体
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + RequestSchema,
    S: Send + Sync,
{
    type Rejection = CoreError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            debug!("请求体解析失败: {}", rejection.body_text());
            CoreError::bad_request(T::INVALID_MESSAGE)
        })?;

        value.validate().map_err(|errors| {
            debug!("请求体校验失败: {}", errors);
            CoreError::bad_request(T::INVALID_MESSAGE)
        })?;

        Ok(Self(value))
    }
}
