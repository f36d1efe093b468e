//! 文档存储抽象
//!
//! 每个应用只操作一个根集合，文档以 `serde_json::Value` 的形式保存，
//! 通过 `(collection, id)` 定位。服务层使用带类型的 [`Collection`]。

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::{marker::PhantomData, sync::Arc};
use uuid::Uuid;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[cfg(feature = "database")]
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
    #[error("文档编解码失败: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("存储不可用: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// 文档存储后端
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 按插入顺序返回集合中的所有文档
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Value>>;

    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> StoreResult<()>;

    /// 整体替换文档，文档不存在时返回 `false`
    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> StoreResult<bool>;

    /// 删除文档，文档不存在时返回 `false`
    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool>;

    /// 连通性检查
    async fn ping(&self) -> StoreResult<()>;

    fn backend_name(&self) -> &'static str;
}

pub type SharedStore = Arc<dyn DocumentStore>;

/// 可持久化的根文档
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// 带类型的集合句柄
pub struct Collection<T> {
    store: SharedStore,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _marker: PhantomData,
        }
    }
}

impl<T: Document> Collection<T> {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<T>> {
        self.store
            .find_all(T::COLLECTION)
            .await?
            .into_iter()
            .map(|doc| serde_json::from_value(doc).map_err(StoreError::from))
            .collect()
    }

    pub async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<T>> {
        match self.store.find_by_id(T::COLLECTION, id).await? {
            Some(doc) => Ok(Some(serde_json::from_value(doc)?)),
            None => Ok(None),
        }
    }

    pub async fn insert(&self, entity: &T) -> StoreResult<()> {
        let doc = serde_json::to_value(entity)?;
        self.store.insert(T::COLLECTION, entity.id(), doc).await
    }

    pub async fn replace(&self, entity: &T) -> StoreResult<bool> {
        let doc = serde_json::to_value(entity)?;
        self.store.replace(T::COLLECTION, entity.id(), doc).await
    }

    pub async fn delete_by_id(&self, id: Uuid) -> StoreResult<bool> {
        self.store.delete(T::COLLECTION, id).await
    }
}
