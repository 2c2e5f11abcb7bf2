// Config Service
//
// 配置服务门面，提供统一的 API

use std::sync::Arc;
use tracing::info;

use crate::modules::config::domain::{AppConfig, PartialAppConfig};
use crate::modules::config::ports::{ConfigError, ConfigRepository};

/// 配置服务实现
pub struct ConfigService {
    repository: Arc<dyn ConfigRepository>,
}

impl ConfigService {
    pub fn new(repository: Arc<dyn ConfigRepository>) -> Self {
        Self { repository }
    }

    /// 获取仓储引用
    pub fn repository(&self) -> &Arc<dyn ConfigRepository> {
        &self.repository
    }

    /// 加载已保存的配置，不含环境变量覆盖
    pub async fn load_stored(&self) -> Result<AppConfig, ConfigError> {
        self.repository.load().await
    }

    /// 加载生效配置
    ///
    /// 环境变量覆盖只作用于返回值，不会写回存储
    pub async fn load(&self) -> Result<AppConfig, ConfigError> {
        let config = self.repository.load().await?.with_env_overrides();
        Self::validate(&config)?;
        Ok(config)
    }

    /// 验证并保存配置
    pub async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        Self::validate(config)?;
        self.repository.save(config).await
    }

    /// 合并部分更新并保存
    pub async fn update(&self, partial: PartialAppConfig) -> Result<AppConfig, ConfigError> {
        let mut config = self.repository.load().await?;
        config.merge(partial);
        self.save(&config).await?;
        Ok(config)
    }

    /// 重置为默认配置
    pub async fn reset(&self) -> Result<AppConfig, ConfigError> {
        self.repository.clear().await?;
        let config = AppConfig::default();
        self.repository.save(&config).await?;
        info!("Config reset to defaults");
        Ok(config)
    }

    fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        config
            .validate()
            .map_err(|errors| ConfigError::ValidationError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::PartialChatConfig;
    use crate::modules::config::infrastructure::InMemoryConfigRepository;

    fn service() -> ConfigService {
        ConfigService::new(Arc::new(InMemoryConfigRepository::new()))
    }

    #[tokio::test]
    async fn test_update_merges_and_persists() {
        let service = service();

        let updated = service
            .update(PartialAppConfig {
                chat: Some(PartialChatConfig {
                    poll_interval_ms: Some(250),
                }),
                seed_demo_data: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(updated.chat.poll_interval_ms, 250);
        assert_eq!(service.load_stored().await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_invalid_update_is_rejected() {
        let service = service();

        let result = service
            .update(PartialAppConfig {
                chat: Some(PartialChatConfig {
                    poll_interval_ms: Some(0),
                }),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
        // 存储保持不变
        assert_eq!(
            service.load_stored().await.unwrap().chat.poll_interval_ms,
            1000
        );
    }

    #[tokio::test]
    async fn test_reset() {
        let service = service();

        let mut config = AppConfig::default();
        config.seed_demo_data = false;
        service.save(&config).await.unwrap();

        let reset = service.reset().await.unwrap();
        assert!(reset.seed_demo_data);
        assert!(service.repository().exists().await.unwrap());
    }
}
