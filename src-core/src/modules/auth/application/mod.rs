// Auth Application Layer - 应用层
// 命令处理器负责登录、注册、社交登录和登出

pub mod commands;
pub mod session_state;

pub use commands::*;
pub use session_state::SessionState;

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::RepositoryError;

/// 认证错误类型
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

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
    /// 执行命令
    async fn handle(&self, command: C) -> Result<R, AuthError>;
}
