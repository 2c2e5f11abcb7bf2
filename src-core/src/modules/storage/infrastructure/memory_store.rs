use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::modules::storage::ports::{KeyValueStore, StorageError};

/// 内存键值存储
///
/// 用于开发和测试；多个模块共享同一个实例即可模拟同一浏览器的 localStorage
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// 以预置数据创建
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut values = self.values.write().await;
        values.remove(key);
        Ok(())
    }
}

/// 拒绝写入指定键的存储，其余操作委托给内存存储
#[cfg(test)]
pub(crate) struct RejectingKeyValueStore {
    inner: InMemoryKeyValueStore,
    rejected_key: String,
}

#[cfg(test)]
impl RejectingKeyValueStore {
    pub(crate) fn new(rejected_key: impl Into<String>) -> Self {
        Self {
            inner: InMemoryKeyValueStore::new(),
            rejected_key: rejected_key.into(),
        }
    }
}

#[cfg(test)]
#[async_trait]
impl KeyValueStore for RejectingKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        if key == self.rejected_key {
            return Err(StorageError::Io(format!("write to {} rejected", key)));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_remove() {
        let store = InMemoryKeyValueStore::new();
        assert!(store.get("k").await.unwrap().is_none());

        store.set("k", "v1".to_string()).await.unwrap();
        store.set("k", "v2".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));

        store.remove("k").await.unwrap();
        store.remove("k").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_with_entries() {
        let store = InMemoryKeyValueStore::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get("b").await.unwrap().as_deref(), Some("2"));
    }
}
