use async_trait::async_trait;
use thiserror::Error;

use crate::modules::triage::domain::TriageSuggestion;

/// 分诊错误类型
#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: String, message: String },

    #[error("Authentication failed: {0}")]
    AuthenticationError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Triage assistant is disabled")]
    Disabled,
}

/// AI 分诊协作者端口
///
/// 实现可以失败；失败由 TriageService 统一兜底
#[async_trait]
pub trait TriagePort: Send + Sync {
    /// 适配器名称，用于日志
    fn name(&self) -> &str;

    /// 分析求助内容，给出建议职业和紧急程度
    async fn suggest(&self, problem: &str) -> Result<TriageSuggestion, TriageError>;

    /// 针对紧急症状给出一两句安抚性建议
    async fn urgent_advice(&self, symptoms: &str) -> Result<String, TriageError>;
}
