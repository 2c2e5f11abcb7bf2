// 集合读写辅助函数
//
// 所有集合都以 JSON 整体存放在单个键下，追加即一次完整的读-改-写

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::ports::{KeyValueStore, StorageError};

/// 解析存储中的原始字符串
pub fn decode<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })
}

/// 读取单个 JSON 值
///
/// 键不存在返回 `Ok(None)`；内容无法解析返回 `StorageError::Corrupt`，由调用方决定如何恢复
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key).await? {
        Some(raw) => decode(key, &raw).map(Some),
        None => Ok(None),
    }
}

/// 读取 JSON 数组集合
///
/// 键不存在或内容损坏时都返回空集合；损坏会记录警告但不会报错
pub async fn read_collection<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    match read_json::<Vec<T>>(store, key).await {
        Ok(items) => Ok(items.unwrap_or_default()),
        Err(StorageError::Corrupt { key, reason }) => {
            warn!(
                "Stored collection '{}' is corrupt, treating it as empty: {}",
                key, reason
            );
            Ok(Vec::new())
        }
        Err(e) => Err(e),
    }
}

/// 序列化并写入 JSON 值
pub async fn write_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let content =
        serde_json::to_string(value).map_err(|e| StorageError::SerializationError(e.to_string()))?;
    store.set(key, content).await
}
