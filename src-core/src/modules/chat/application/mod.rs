// Chat Application Layer - 应用层
// 实现 CQRS 模式的命令和查询处理器，以及会话观察者

pub mod commands;
pub mod observers;
pub mod queries;

pub use commands::*;
pub use observers::*;
pub use queries::*;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::RepositoryError;

/// 聊天错误类型
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Message text cannot be empty")]
    EmptyMessage,

    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

/// 命令处理器 trait
///
/// 遵循 CQRS 模式，命令处理器负责执行有副作用的操作
#[async_trait]
pub trait CommandHandler<C, R>: Send + Sync
where
    C: Send + Sync,
{
    /// 执行命令
    async fn handle(&self, command: C) -> Result<R, ChatError>;
}

/// 查询处理器 trait
///
/// 遵循 CQRS 模式，查询处理器负责只读操作
#[async_trait]
pub trait QueryHandler<Q, R>: Send + Sync
where
    Q: Send + Sync,
{
    /// 执行查询
    async fn handle(&self, query: Q) -> Result<R, ChatError>;
}
