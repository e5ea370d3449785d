use async_trait::async_trait;
use kernel::repository::document::DocumentStore;
use serde_json::Value;
use shared::error::AppResult;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// In-process `DocumentStore` used in development and in tests.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: Mutex<HashMap<String, Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn paths(&self) -> Vec<String> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Value>> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn put(&self, path: &str, document: &Value) -> AppResult<()> {
        self.lock().insert(path.to_string(), document.clone());
        Ok(())
    }

    async fn put_merge(&self, path: &str, document: &Value) -> AppResult<()> {
        let mut documents = self.lock();
        match documents.get_mut(path) {
            Some(existing) => merge_into(existing, document),
            None => {
                documents.insert(path.to_string(), document.clone());
            }
        }
        Ok(())
    }

    async fn get(&self, path: &str) -> AppResult<Option<Value>> {
        Ok(self.lock().get(path).cloned())
    }
}

fn merge_into(target: &mut Value, incoming: &Value) {
    match (target.as_object_mut(), incoming.as_object()) {
        (Some(target), Some(incoming)) => {
            for (key, value) in incoming {
                match target.get_mut(key) {
                    Some(existing) => merge_into(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        _ => *target = incoming.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryDocumentStore::new();
        store
            .put("trips/u1-1", &json!({ "vehiculo": "Toyota Yaris" }))
            .await
            .unwrap();

        let loaded = store.get("trips/u1-1").await.unwrap();
        assert_eq!(loaded, Some(json!({ "vehiculo": "Toyota Yaris" })));
    }

    #[tokio::test]
    async fn get_missing_path_is_none() {
        let store = MemoryDocumentStore::new();
        assert_eq!(store.get("trips/none").await.unwrap(), None);
    }

    #[tokio::test]
    async fn put_replaces_the_whole_document() {
        let store = MemoryDocumentStore::new();
        store
            .put("trips/u1-1", &json!({ "vehiculo": "Toyota Yaris", "price": 1000 }))
            .await
            .unwrap();
        store
            .put("trips/u1-1", &json!({ "vehiculo": "Suzuki Swift" }))
            .await
            .unwrap();

        let loaded = store.get("trips/u1-1").await.unwrap().unwrap();
        assert_eq!(loaded, json!({ "vehiculo": "Suzuki Swift" }));
    }

    #[tokio::test]
    async fn put_merge_keeps_untouched_fields() {
        let store = MemoryDocumentStore::new();
        store
            .put("trips/u1-1", &json!({ "vehiculo": "Toyota Yaris", "price": 1000 }))
            .await
            .unwrap();
        store
            .put_merge("trips/u1-1", &json!({ "price": 1500 }))
            .await
            .unwrap();

        let loaded = store.get("trips/u1-1").await.unwrap().unwrap();
        assert_eq!(loaded, json!({ "vehiculo": "Toyota Yaris", "price": 1500 }));
    }
}
