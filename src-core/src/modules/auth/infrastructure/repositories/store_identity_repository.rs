// 基于键值存储的身份目录
//
// 整张身份表以 JSON 数组存放在单个键下，与 Web 客户端的 localStorage 布局相同

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::modules::auth::domain::{Identity, PasswordHash};
use crate::modules::auth::ports::IdentityRepository;
use crate::modules::storage::{keys, read_collection, write_json, KeyValueStore};
use crate::shared::{RepositoryError, UserId};

/// 键值存储身份仓储
pub struct StoreIdentityRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    /// 串行化读-改-写
    write_lock: Mutex<()>,
}

impl StoreIdentityRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, keys::USERS)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Identity>, RepositoryError> {
        Ok(read_collection(self.store.as_ref(), &self.key).await?)
    }
}

#[async_trait]
impl IdentityRepository for StoreIdentityRepository {
    async fn list(&self) -> Result<Vec<Identity>, RepositoryError> {
        self.load_all().await
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, RepositoryError> {
        Ok(self.load_all().await?.into_iter().find(|i| i.id() == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|i| i.email() == email))
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &PasswordHash,
    ) -> Result<Option<Identity>, RepositoryError> {
        Ok(self
            .load_all()
            .await?
            .into_iter()
            .find(|i| i.matches_credentials(email, password_hash)))
    }

    async fn insert(&self, identity: &Identity) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut identities = self.load_all().await?;

        if identities.iter().any(|i| i.email() == identity.email()) {
            return Err(RepositoryError::Conflict(format!(
                "email {} already registered",
                identity.email()
            )));
        }
        if identities.iter().any(|i| i.id() == identity.id()) {
            return Err(RepositoryError::Conflict(format!(
                "identity id {} already taken",
                identity.id()
            )));
        }

        identities.push(identity.clone());
        write_json(self.store.as_ref(), &self.key, &identities).await?;

        debug!(
            "Identity {} added to directory ({} total)",
            identity.id(),
            identities.len()
        );
        Ok(())
    }

    async fn remove(&self, id: &UserId) -> Result<(), RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut identities = self.load_all().await?;

        let index = identities
            .iter()
            .position(|i| i.id() == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("identity {}", id)))?;
        identities.remove(index);
        write_json(self.store.as_ref(), &self.key, &identities).await?;

        debug!("Identity {} removed from directory", id);
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.load_all().await?.len())
    }

    async fn seed_if_absent(&self, identities: &[Identity]) -> Result<bool, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        if self.store.get(&self.key).await?.is_some() {
            return Ok(false);
        }

        write_json(self.store.as_ref(), &self.key, identities).await?;
        debug!("Seeded identity directory with {} entries", identities.len());
        Ok(true)
    }
}
