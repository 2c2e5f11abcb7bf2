use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use crate::modules::auth::domain::Identity;
use crate::modules::auth::ports::SessionRepository;
use crate::modules::storage::{keys, read_json, write_json, KeyValueStore, StorageError};
use crate::shared::RepositoryError;

/// 键值存储会话仓储
pub struct StoreSessionRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StoreSessionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: keys::CURRENT_USER.to_string(),
        }
    }
}

#[async_trait]
impl SessionRepository for StoreSessionRepository {
    async fn load(&self) -> Result<Option<Identity>, RepositoryError> {
        match read_json::<Identity>(self.store.as_ref(), &self.key).await {
            Ok(identity) => Ok(identity),
            Err(StorageError::Corrupt { key, reason }) => {
                // 会话无法解析时视为已登出，并清掉损坏的副本
                warn!("Stored session '{}' is corrupt, logging out: {}", key, reason);
                self.store.remove(&self.key).await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, identity: &Identity) -> Result<(), RepositoryError> {
        write_json(self.store.as_ref(), &self.key, &identity.sanitized()).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), RepositoryError> {
        self.store.remove(&self.key).await?;
        Ok(())
    }
}
