use async_trait::async_trait;

use super::super::domain::{Identity, PasswordHash};
use crate::shared::{RepositoryError, UserId};

/// 身份目录仓储端口
///
/// 保持插入顺序；邮箱比较区分大小写
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    /// 获取全部身份（按插入顺序）
    async fn list(&self) -> Result<Vec<Identity>, RepositoryError>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &UserId) -> Result<Option<Identity>, RepositoryError>;

    /// 根据邮箱查找
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, RepositoryError>;

    /// 查找邮箱和密码摘要同时匹配的身份
    async fn find_by_credentials(
        &self,
        email: &str,
        password_hash: &PasswordHash,
    ) -> Result<Option<Identity>, RepositoryError>;

    /// 追加身份；邮箱或 ID 已存在时返回 `RepositoryError::Conflict`，目录不变
    async fn insert(&self, identity: &Identity) -> Result<(), RepositoryError>;

    /// 按 ID 删除身份；不存在时返回 `RepositoryError::NotFound`
    ///
    /// 只用于撤回同一操作中刚追加、但后续步骤失败的身份
    async fn remove(&self, id: &UserId) -> Result<(), RepositoryError>;

    /// 身份总数
    async fn count(&self) -> Result<usize, RepositoryError>;

    /// 目录从未写入过时写入给定身份，返回是否写入
    async fn seed_if_absent(&self, identities: &[Identity]) -> Result<bool, RepositoryError>;
}
