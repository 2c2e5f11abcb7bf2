use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::super::{CommandHandler, ProfessionalsError};
use crate::modules::professionals::ports::FavoritesRepository;
use crate::shared::UserId;

/// 切换收藏命令
#[derive(Debug, Clone)]
pub struct ToggleFavoriteCommand {
    pub profile_id: UserId,
}

/// 切换收藏命令处理器
///
/// 不检查档案是否存在
pub struct ToggleFavoriteHandler {
    favorites_repository: Arc<dyn FavoritesRepository>,
}

impl ToggleFavoriteHandler {
    pub fn new(favorites_repository: Arc<dyn FavoritesRepository>) -> Self {
        Self {
            favorites_repository,
        }
    }
}

#[async_trait]
impl CommandHandler<ToggleFavoriteCommand, bool> for ToggleFavoriteHandler {
    async fn handle(&self, command: ToggleFavoriteCommand) -> Result<bool, ProfessionalsError> {
        let favorite = self
            .favorites_repository
            .toggle(&command.profile_id)
            .await?;
        debug!("Profile {} favorite: {}", command.profile_id, favorite);
        Ok(favorite)
    }
}
