//! 内存文档存储
//!
//! 进程退出后数据即丢失，用于本地试用和测试。

use async_trait::async_trait;
use serde_json::Value;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};
use uuid::Uuid;

use super::store::{DocumentStore, StoreError, StoreResult};

type Collections = HashMap<String, Vec<(Uuid, Value)>>;

#[derive(Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<Mutex<Collections>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Collections>> {
        self.collections
            .lock()
            .map_err(|_| StoreError::Unavailable("内存存储锁已中毒".to_string()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self.lock()?;
        Ok(collections
            .get(collection)
            .map(|docs| docs.iter().map(|(_, doc)| doc.clone()).collect())
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> StoreResult<Option<Value>> {
        let collections = self.lock()?;
        Ok(collections.get(collection).and_then(|docs| {
            docs.iter()
                .find(|(doc_id, _)| *doc_id == id)
                .map(|(_, doc)| doc.clone())
        }))
    }

    async fn insert(&self, collection: &str, id: Uuid, doc: Value) -> StoreResult<()> {
        let mut collections = self.lock()?;
        let docs = collections.entry(collection.to_string()).or_default();
        // 主键冲突时按替换处理，与 upsert 语义一致
        match docs.iter().position(|(doc_id, _)| *doc_id == id) {
            Some(pos) => docs[pos].1 = doc,
            None => docs.push((id, doc)),
        }
        Ok(())
    }

    async fn replace(&self, collection: &str, id: Uuid, doc: Value) -> StoreResult<bool> {
        let mut collections = self.lock()?;
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|(doc_id, _)| *doc_id == id));
        match slot {
            Some(slot) => {
                slot.1 = doc;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, collection: &str, id: Uuid) -> StoreResult<bool> {
        let mut collections = self.lock()?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|(doc_id, _)| *doc_id != id);
        Ok(docs.len() != before)
    }

    async fn ping(&self) -> StoreResult<()> {
        self.lock().map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let store = MemoryDocumentStore::new();
        let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
        for (i, id) in ids.iter().enumerate() {
            store.insert("items", *id, json!({ "n": i })).await.unwrap();
        }

        let docs = store.find_all("items").await.unwrap();
        assert_eq!(docs, vec![json!({"n": 0}), json!({"n": 1}), json!({"n": 2})]);
        assert!(store.find_all("other").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_replace_and_delete_report_presence() {
        let store = MemoryDocumentStore::new();
        let id = Uuid::new_v4();

        assert!(!store.replace("items", id, json!({})).await.unwrap());
        store.insert("items", id, json!({ "v": 1 })).await.unwrap();
        assert!(store.replace("items", id, json!({ "v": 2 })).await.unwrap());
        assert_eq!(
            store.find_by_id("items", id).await.unwrap(),
            Some(json!({ "v": 2 }))
        );

        assert!(store.delete("items", id).await.unwrap());
        assert!(!store.delete("items", id).await.unwrap());
        assert_eq!(store.find_by_id("items", id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryDocumentStore::new();
        let id = Uuid::new_v4();
        store.insert("a", id, json!(1)).await.unwrap();

        assert_eq!(store.find_by_id("b", id).await.unwrap(), None);
        assert!(!store.delete("b", id).await.unwrap());
        assert_eq!(store.find_all("a").await.unwrap().len(), 1);
    }
}
