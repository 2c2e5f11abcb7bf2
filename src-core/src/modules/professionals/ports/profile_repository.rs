use async_trait::async_trait;

use super::super::domain::ProfessionalProfile;
use crate::shared::{RepositoryError, UserId};

/// 职业档案仓储端口
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// 全部档案，最新发布的在前
    async fn list(&self) -> Result<Vec<ProfessionalProfile>, RepositoryError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<ProfessionalProfile>, RepositoryError>;

    /// 同 ID 档案存在时原地替换，否则插入到最前面；返回是否为新档案
    async fn upsert(&self, profile: &ProfessionalProfile) -> Result<bool, RepositoryError>;

    /// 档案表从未写入过时写入给定档案，返回是否写入
    async fn seed_if_absent(
        &self,
        profiles: &[ProfessionalProfile],
    ) -> Result<bool, RepositoryError>;
}
