#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use doc_crud_apps::{
    build_router,
    infrastructure::{
        memory::MemoryDocumentStore,
        store::{DocumentStore, SharedStore, StoreError, StoreResult},
    },
    AppKind,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub fn memory_app(kind: AppKind) -> Router {
    build_router(kind, Arc::new(MemoryDocumentStore::new()))
}

pub fn failing_app(kind: AppKind) -> Router {
    let store: SharedStore = Arc::new(FailingStore);
    build_router(kind, store)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: &str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap().status()
}

pub async fn get_page(app: &Router) -> (StatusCode, String, String) {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

/// 所有操作都失败的存储，用来验证 500 路径
pub struct FailingStore;

fn down<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("connection refused".to_string()))
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_all(&self, _collection: &str) -> StoreResult<Vec<Value>> {
        down()
    }

    async fn find_by_id(&self, _collection: &str, _id: Uuid) -> StoreResult<Option<Value>> {
        down()
    }

    async fn insert(&self, _collection: &str, _id: Uuid, _doc: Value) -> StoreResult<()> {
        down()
    }

    async fn replace(&self, _collection: &str, _id: Uuid, _doc: Value) -> StoreResult<bool> {
        down()
    }

    async fn delete(&self, _collection: &str, _id: Uuid) -> StoreResult<bool> {
        down()
    }

    async fn ping(&self) -> StoreResult<()> {
        down()
    }

    fn backend_name(&self) -> &'static str {
        "failing"
    }
}
