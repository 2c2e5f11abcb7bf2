use async_trait::async_trait;

use crate::modules::triage::domain::TriageSuggestion;
use crate::modules::triage::ports::{TriageError, TriagePort};

/// 始终失败的适配器，让服务走兜底结果
pub struct DisabledTriageAdapter;

#[async_trait]
impl TriagePort for DisabledTriageAdapter {
    fn name(&self) -> &str {
        "disabled"
    }

    async fn suggest(&self, _problem: &str) -> Result<TriageSuggestion, TriageError> {
        Err(TriageError::Disabled)
    }

    async fn urgent_advice(&self, _symptoms: &str) -> Result<String, TriageError> {
        Err(TriageError::Disabled)
    }
}
