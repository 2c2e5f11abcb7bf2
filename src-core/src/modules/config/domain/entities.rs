// Config Domain Entities
//
// 配置领域实体定义

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::value_objects::StorageBackend;

/// 覆盖 AI 分诊 API Key 的环境变量
pub const API_KEY_ENV: &str = "AJUDE_API_KEY";

/// 存储配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: PathBuf::from("ajude-data"),
        }
    }
}

/// 聊天配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatConfig {
    pub poll_interval_ms: u64,
}

impl ChatConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 1000,
        }
    }
}

/// AI 分诊配置
///
/// 使用 OpenAI 兼容的 chat/completions 接口
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TriageConfig {
    pub enabled: bool,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl TriageConfig {
    /// 启用且配置了 API Key 才会真正发起请求
    pub fn is_usable(&self) -> bool {
        self.enabled && !self.api_key.trim().is_empty()
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 30,
        }
    }
}

/// 应用配置聚合根
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub chat: ChatConfig,
    pub triage: TriageConfig,
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            chat: ChatConfig::default(),
            triage: TriageConfig::default(),
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 纯内存配置，用于测试和开发
    pub fn in_memory() -> Self {
        Self {
            storage: StorageConfig {
                backend: StorageBackend::Memory,
                ..StorageConfig::default()
            },
            ..Self::default()
        }
    }

    /// 应用环境变量覆盖
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_api_key_override(std::env::var(API_KEY_ENV).ok());
        self
    }

    pub(crate) fn apply_api_key_override(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.triage.api_key = key;
        }
    }

    /// 合并部分配置更新
    pub fn merge(&mut self, partial: PartialAppConfig) {
        if let Some(storage) = partial.storage {
            if let Some(backend) = storage.backend {
                self.storage.backend = backend;
            }
            if let Some(data_dir) = storage.data_dir {
                self.storage.data_dir = data_dir;
            }
        }

        if let Some(chat) = partial.chat {
            if let Some(poll_interval_ms) = chat.poll_interval_ms {
                self.chat.poll_interval_ms = poll_interval_ms;
            }
        }

        if let Some(triage) = partial.triage {
            if let Some(enabled) = triage.enabled {
                self.triage.enabled = enabled;
            }
            if let Some(base_url) = triage.base_url {
                self.triage.base_url = base_url;
            }
            if let Some(api_key) = triage.api_key {
                self.triage.api_key = api_key;
            }
            if let Some(model) = triage.model {
                self.triage.model = model;
            }
            if let Some(timeout_secs) = triage.timeout_secs {
                self.triage.timeout_secs = timeout_secs;
            }
        }

        if let Some(seed_demo_data) = partial.seed_demo_data {
            self.seed_demo_data = seed_demo_data;
        }
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.storage.backend == StorageBackend::File
            && self.storage.data_dir.as_os_str().is_empty()
        {
            errors.push("File storage requires a data directory".to_string());
        }

        if self.chat.poll_interval_ms == 0 {
            errors.push("Poll interval must be greater than zero".to_string());
        }

        if self.triage.timeout_secs == 0 {
            errors.push("Triage timeout must be greater than zero".to_string());
        }
        if self.triage.enabled && self.triage.base_url.trim().is_empty() {
            errors.push("Triage base URL cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// 部分配置更新（用于合并）
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialAppConfig {
    pub storage: Option<PartialStorageConfig>,
    pub chat: Option<PartialChatConfig>,
    pub triage: Option<PartialTriageConfig>,
    pub seed_demo_data: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialStorageConfig {
    pub backend: Option<StorageBackend>,
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialChatConfig {
    pub poll_interval_ms: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialTriageConfig {
    pub enabled: Option<bool>,
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub timeout_secs: Option<u64>,
}
