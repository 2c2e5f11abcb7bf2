// Professionals Application Layer - 应用层

pub mod commands;
pub mod queries;

pub use commands::*;
pub use queries::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::RepositoryError;

/// 职业档案错误类型
#[derive(Debug, Error)]
pub enum ProfessionalsError {
    #[error("Profile not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler<C, R>: Send + Sync
where
    C: Send + Sync,
{
    async fn handle(&self, command: C) -> Result<R, ProfessionalsError>;
}

/// 查询处理器 trait
#[async_trait]
pub trait QueryHandler<Q, R>: Send + Sync
where
    Q: Send + Sync,
{
    async fn handle(&self, query: Q) -> Result<R, ProfessionalsError>;
}
