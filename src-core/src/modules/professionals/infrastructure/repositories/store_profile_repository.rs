use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::modules::professionals::domain::ProfessionalProfile;
use crate::modules::professionals::ports::ProfileRepository;
use crate::modules::storage::{keys, read_collection, write_json, KeyValueStore};
use crate::shared::{RepositoryError, UserId};

/// 键值存储档案仓储
pub struct StoreProfileRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreProfileRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<ProfessionalProfile>, RepositoryError> {
        Ok(read_collection(self.store.as_ref(), keys::PROFESSIONALS).await?)
    }
}

#[async_trait]
impl ProfileRepository for StoreProfileRepository {
    async fn list(&self) -> Result<Vec<ProfessionalProfile>, RepositoryError> {
        self.load_all().await
    }

    async fn find_by_id(
        &self,
        id: &UserId,
    ) -> Result<Option<ProfessionalProfile>, RepositoryError> {
        Ok(self.load_all().await?.into_iter().find(|p| &p.id == id))
    }

    async fn upsert(&self, profile: &ProfessionalProfile) -> Result<bool, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut profiles = self.load_all().await?;

        let created = match profiles.iter().position(|p| p.id == profile.id) {
            Some(index) => {
                profiles[index] = profile.clone();
                false
            }
            None => {
                profiles.insert(0, profile.clone());
                true
            }
        };

        write_json(self.store.as_ref(), keys::PROFESSIONALS, &profiles).await?;
        debug!(
            "Profile {} {}",
            profile.id,
            if created { "published" } else { "updated" }
        );
        Ok(created)
    }

    async fn seed_if_absent(
        &self,
        profiles: &[ProfessionalProfile],
    ) -> Result<bool, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        if self.store.get(keys::PROFESSIONALS).await?.is_some() {
            return Ok(false);
        }

        write_json(self.store.as_ref(), keys::PROFESSIONALS, profiles).await?;
        debug!("Seeded profile directory with {} entries", profiles.len());
        Ok(true)
    }
}
