use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::modules::professionals::ports::FavoritesRepository;
use crate::modules::storage::{keys, read_collection, write_json, KeyValueStore};
use crate::shared::{RepositoryError, UserId};

/// 键值存储收藏仓储
pub struct StoreFavoritesRepository {
    store: Arc<dyn KeyValueStore>,
    write_lock: Mutex<()>,
}

impl StoreFavoritesRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl FavoritesRepository for StoreFavoritesRepository {
    async fn list(&self) -> Result<Vec<UserId>, RepositoryError> {
        Ok(read_collection(self.store.as_ref(), keys::FAVORITES).await?)
    }

    async fn contains(&self, id: &UserId) -> Result<bool, RepositoryError> {
        Ok(self.list().await?.contains(id))
    }

    async fn toggle(&self, id: &UserId) -> Result<bool, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut favorites = self.list().await?;

        let now_favorite = match favorites.iter().position(|f| f == id) {
            Some(index) => {
                favorites.remove(index);
                false
            }
            None => {
                favorites.push(id.clone());
                true
            }
        };

        write_json(self.store.as_ref(), keys::FAVORITES, &favorites).await?;
        Ok(now_favorite)
    }
}
