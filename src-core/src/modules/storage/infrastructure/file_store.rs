// 文件持久化键值存储
//
// 每个键对应数据目录下的一个 JSON 文件。
// 读取时不做缓存，每次都从磁盘读取，这样共享同一目录的多个进程可以通过轮询看到彼此的写入。

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::modules::storage::ports::{KeyValueStore, StorageError};

/// 文件键值存储
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    /// 创建新的文件键值存储
    ///
    /// # Arguments
    /// * `data_dir` - 数据目录路径，不存在时自动创建
    pub async fn new(data_dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&data_dir).await?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.data_dir.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        // 先写临时文件再重命名，读者不会看到写了一半的内容
        let tmp_path = self
            .data_dir
            .join(format!(".{}.{}.tmp", key, uuid::Uuid::new_v4().simple()));

        fs::write(&tmp_path, value).await?;
        if let Err(e) = fs::rename(&tmp_path, &path).await {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(e.into());
        }

        debug!("Persisted key {} to {:?}", key, path);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        store.set("ajude_users_db", "[]".to_string()).await.unwrap();
        let value = store.get("ajude_users_db").await.unwrap();

        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        assert!(store.get("nothing_here").await.unwrap().is_none());
        // 删除不存在的键不报错
        store.remove("nothing_here").await.unwrap();
    }

    #[tokio::test]
    async fn test_second_instance_sees_writes() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();

        let writer = FileKeyValueStore::new(path.clone()).await.unwrap();
        let reader = FileKeyValueStore::new(path).await.unwrap();

        writer.set("shared", "one".to_string()).await.unwrap();
        assert_eq!(reader.get("shared").await.unwrap().as_deref(), Some("one"));

        writer.set("shared", "two".to_string()).await.unwrap();
        assert_eq!(reader.get("shared").await.unwrap().as_deref(), Some("two"));

        writer.remove("shared").await.unwrap();
        assert!(reader.get("shared").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().to_path_buf())
            .await
            .unwrap();

        let result = store.set("../escape", "x".to_string()).await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
    }
}
