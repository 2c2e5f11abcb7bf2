use thiserror::Error;

use crate::modules::auth::AuthError;
use crate::modules::chat::ChatError;
use crate::modules::config::ConfigError;
use crate::modules::professionals::ProfessionalsError;
use crate::modules::storage::StorageError;
use crate::modules::triage::TriageError;

/// 仓储错误类型
///
/// 各模块的仓储端口共用
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("Professionals error: {0}")]
    Professionals(#[from] ProfessionalsError),

    #[error("Triage error: {0}")]
    Triage(#[from] TriageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
