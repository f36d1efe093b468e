//! 数据库基础设施
//!
//! 以 Postgres 的 JSONB 列承载文档集合，所有集合共用一张 `documents` 表。

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    types::Json,
};
use tracing::info;
use uuid::Uuid;

use super::store::{DocumentStore, StoreResult};
use crate::config::StoreConfig;

pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    /// 连接数据库并确保表结构存在，连接失败直接返回错误，不做重试
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(config.database_url())
            .await?;

        let store = Self { pool };
        store.create_tables().await?;
        Ok(store)
    }

    async fn create_tables(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                seq BIGSERIAL NOT NULL,
                collection TEXT NOT NULL,
                id UUID NOT NULL,
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        info!("documents 表已就绪");
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let rows = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT body FROM documents WHERE collection = $1 ORDER BY seq",
        )
        .bind(collection)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|Json(doc)| doc).collect())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Value>> {
        let row = sqlx::query_scalar::<_, Json<Value>>(
            "SELECT body FROM documents WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|Json(doc)| doc))
    }

    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, body) VALUES ($1, $2, $3)
            ON CONFLICT (collection, id) DO UPDATE SET body = EXCLUDED.body, updated_at = NOW()
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(Json(doc))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> StoreResult<bool> {
        let result = sqlx::query(
            "UPDATE documents SET body = $3, updated_at = NOW() WHERE collection = $1 AND id = $2",
        )
        .bind(collection)
        .bind(id)
        .bind(Json(doc))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND id = $2")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
