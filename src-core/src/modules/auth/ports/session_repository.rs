use async_trait::async_trait;

use super::super::domain::Identity;
use crate::shared::RepositoryError;

/// 会话仓储端口
///
/// 持久化当前登录身份（已去除密码摘要），最多一个
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// 读取持久化的会话
    async fn load(&self) -> Result<Option<Identity>, RepositoryError>;

    /// 保存会话
    async fn save(&self, identity: &Identity) -> Result<(), RepositoryError>;

    /// 清除会话，没有会话时不报错
    async fn clear(&self) -> Result<(), RepositoryError>;
}
