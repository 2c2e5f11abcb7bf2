use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage corrupt at '{key}': {reason}")]
    Corrupt { key: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

/// 持久化键值存储端口
///
/// 语义与浏览器 localStorage 相同：值是整段字符串，每次写入替换整个值
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// 读取键对应的值，不存在时返回 None
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// 写入（覆盖）键对应的值
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// 删除键，键不存在时不报错
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
