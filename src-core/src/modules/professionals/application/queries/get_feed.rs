use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

use super::super::{ProfessionalsError, QueryHandler};
use crate::modules::professionals::domain::{FeedQuery, ProfessionalProfile};
use crate::modules::professionals::ports::{FavoritesRepository, ProfileRepository};
use crate::shared::UserId;

/// 信息流查询处理器
pub struct GetFeedHandler {
    profile_repository: Arc<dyn ProfileRepository>,
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl GetFeedHandler {
    pub fn new(
        profile_repository: Arc<dyn ProfileRepository>,
        favorites_repository: Arc<dyn FavoritesRepository>,
    ) -> Self {
        Self {
            profile_repository,
            favorites_repository,
        }
    }
}

#[async_trait]
impl QueryHandler<FeedQuery, Vec<ProfessionalProfile>> for GetFeedHandler {
    async fn handle(
        &self,
        query: FeedQuery,
    ) -> Result<Vec<ProfessionalProfile>, ProfessionalsError> {
        let profiles = self.profile_repository.list().await?;
        let favorites: HashSet<UserId> = if query.favorites_only {
            self.favorites_repository.list().await?.into_iter().collect()
        } else {
            HashSet::new()
        };

        Ok(query.apply(profiles, &favorites))
    }
}
