mod disabled;
mod openai;

pub use disabled::*;
pub use openai::*;

use std::sync::Arc;
use tracing::info;

use crate::modules::config::TriageConfig;
use crate::modules::triage::ports::{TriageError, TriagePort};

/// 按配置选择适配器
///
/// 未启用或没有 API Key 时使用禁用适配器
pub fn create_triage_port(config: &TriageConfig) -> Result<Arc<dyn TriagePort>, TriageError> {
    if !config.is_usable() {
        info!("Triage assistant not configured, using fallback answers");
        return Ok(Arc::new(DisabledTriageAdapter));
    }

    Ok(Arc::new(OpenAITriageAdapter::new(config.clone())?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_disabled_without_key() {
        let port = create_triage_port(&TriageConfig::default()).unwrap();
        assert_eq!(port.name(), "disabled");

        let config = TriageConfig {
            enabled: false,
            api_key: "sk-test".to_string(),
            ..TriageConfig::default()
        };
        assert_eq!(create_triage_port(&config).unwrap().name(), "disabled");
    }

    #[test]
    fn test_create_openai_with_key() {
        let config = TriageConfig {
            api_key: "sk-test".to_string(),
            ..TriageConfig::default()
        };
        assert_eq!(create_triage_port(&config).unwrap().name(), "openai");
    }
}
