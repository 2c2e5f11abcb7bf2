use async_trait::async_trait;

use crate::shared::{RepositoryError, UserId};

/// 收藏仓储端口
///
/// 保存收藏的档案 ID，按收藏顺序
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<UserId>, RepositoryError>;

    async fn contains(&self, id: &UserId) -> Result<bool, RepositoryError>;

    /// 切换收藏状态，返回切换后的状态
    async fn toggle(&self, id: &UserId) -> Result<bool, RepositoryError>;
}
