use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::triage::domain::{TriageSuggestion, FALLBACK_URGENT_ADVICE};
use crate::modules::triage::ports::TriagePort;

/// 分诊服务
///
/// 包装协作者端口，任何失败都替换为兜底结果，从不向调用方返回错误
pub struct TriageService {
    port: Arc<dyn TriagePort>,
}

impl TriageService {
    pub fn new(port: Arc<dyn TriagePort>) -> Self {
        Self { port }
    }

    /// 分析求助内容
    pub async fn analyze(&self, problem: &str) -> TriageSuggestion {
        let problem = problem.trim();
        if problem.is_empty() {
            return TriageSuggestion::fallback();
        }

        match self.port.suggest(problem).await {
            Ok(suggestion) => {
                debug!(
                    "Triage via {} suggested '{}' ({})",
                    self.port.name(),
                    suggestion.suggested_profession,
                    suggestion.urgency.as_str()
                );
                suggestion
            }
            Err(e) => {
                warn!("Triage via {} failed, using fallback: {}", self.port.name(), e);
                TriageSuggestion::fallback()
            }
        }
    }

    /// 紧急情况下的简短建议
    pub async fn urgent_advice(&self, symptoms: &str) -> String {
        let symptoms = symptoms.trim();
        if symptoms.is_empty() {
            return FALLBACK_URGENT_ADVICE.to_string();
        }

        match self.port.urgent_advice(symptoms).await {
            Ok(advice) => advice,
            Err(e) => {
                warn!(
                    "Urgent advice via {} failed, using fallback: {}",
                    self.port.name(),
                    e
                );
                FALLBACK_URGENT_ADVICE.to_string()
            }
        }
    }
}
