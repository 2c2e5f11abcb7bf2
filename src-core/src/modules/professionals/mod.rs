// Professionals Module - 职业档案目录
//
// 档案列表、发布、收藏和信息流，采用六边形架构：
// - domain: 档案实体、信息流查询、演示数据
// - ports: 档案和收藏仓储端口
// - infrastructure: 基于键值存储的仓储实现
// - application: 发布和收藏命令、信息流查询

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    CommandHandler, GetFeedHandler, ProfessionalsError, PublishProfileCommand,
    PublishProfileHandler, QueryHandler, ToggleFavoriteCommand, ToggleFavoriteHandler,
};
pub use domain::{demo_profiles, Availability, FeedQuery, ProfessionalProfile};
pub use infrastructure::{StoreFavoritesRepository, StoreProfileRepository};
pub use ports::{FavoritesRepository, ProfileRepository};

use std::sync::Arc;

use crate::infrastructure::EventBus;
use crate::modules::storage::KeyValueStore;
use crate::shared::UserId;

/// Professionals 模块容器
pub struct ProfessionalsModule {
    profile_repository: Arc<dyn ProfileRepository>,
    favorites_repository: Arc<dyn FavoritesRepository>,
    publish_handler: PublishProfileHandler,
    toggle_favorite_handler: ToggleFavoriteHandler,
    feed_handler: GetFeedHandler,
}

impl ProfessionalsModule {
    pub fn new(store: Arc<dyn KeyValueStore>, event_bus: Arc<EventBus>) -> Self {
        Self::with_repositories(
            Arc::new(StoreProfileRepository::new(store.clone())),
            Arc::new(StoreFavoritesRepository::new(store)),
            event_bus,
        )
    }

    pub fn with_repositories(
        profile_repository: Arc<dyn ProfileRepository>,
        favorites_repository: Arc<dyn FavoritesRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            publish_handler: PublishProfileHandler::new(profile_repository.clone(), event_bus),
            toggle_favorite_handler: ToggleFavoriteHandler::new(favorites_repository.clone()),
            feed_handler: GetFeedHandler::new(
                profile_repository.clone(),
                favorites_repository.clone(),
            ),
            profile_repository,
            favorites_repository,
        }
    }

    /// 档案表从未写入时写入演示档案
    pub async fn seed_demo_profiles(&self) -> Result<bool, ProfessionalsError> {
        Ok(self
            .profile_repository
            .seed_if_absent(&demo_profiles())
            .await?)
    }

    pub async fn list(&self) -> Result<Vec<ProfessionalProfile>, ProfessionalsError> {
        Ok(self.profile_repository.list().await?)
    }

    pub async fn get(&self, id: &str) -> Result<ProfessionalProfile, ProfessionalsError> {
        self.profile_repository
            .find_by_id(&UserId::new(id))
            .await?
            .ok_or_else(|| ProfessionalsError::NotFound(id.to_string()))
    }

    /// 发布或更新档案
    pub async fn publish_profile(
        &self,
        profile: ProfessionalProfile,
    ) -> Result<ProfessionalProfile, ProfessionalsError> {
        self.publish_handler
            .handle(PublishProfileCommand { profile })
            .await
    }

    /// 切换收藏，返回新的收藏状态
    pub async fn toggle_favorite(&self, id: &str) -> Result<bool, ProfessionalsError> {
        self.toggle_favorite_handler
            .handle(ToggleFavoriteCommand {
                profile_id: UserId::new(id),
            })
            .await
    }

    pub async fn is_favorite(&self, id: &str) -> Result<bool, ProfessionalsError> {
        Ok(self.favorites_repository.contains(&UserId::new(id)).await?)
    }

    /// 收藏的档案 ID，按收藏顺序
    pub async fn favorites(&self) -> Result<Vec<UserId>, ProfessionalsError> {
        Ok(self.favorites_repository.list().await?)
    }

    pub async fn feed(
        &self,
        query: FeedQuery,
    ) -> Result<Vec<ProfessionalProfile>, ProfessionalsError> {
        self.feed_handler.handle(query).await
    }
}
