// Config Module
//
// 配置管理模块，采用六边形架构
//
// 层次结构:
// - domain: 领域层，包含配置实体和值对象
// - ports: 端口层，定义配置读写的抽象接口
// - infrastructure: 基础设施层，实现具体的配置存储适配器
// - application: 应用层，配置服务门面

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

// 重新导出常用类型

// Domain
pub use domain::{
    AppConfig, ChatConfig, PartialAppConfig, PartialChatConfig, PartialStorageConfig,
    PartialTriageConfig, StorageBackend, StorageConfig, TriageConfig, API_KEY_ENV,
};

// Ports
pub use ports::{ConfigError, ConfigRepository};

// Infrastructure
pub use infrastructure::{FileConfigRepository, InMemoryConfigRepository};

// Application
pub use application::ConfigService;

use std::path::Path;
use std::sync::Arc;

/// Config 模块容器
///
/// 管理模块内的依赖注入
pub struct ConfigModule {
    service: ConfigService,
}

impl ConfigModule {
    /// 使用内存仓储创建（用于测试）
    pub fn new_in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryConfigRepository::new()))
    }

    /// 使用文件存储创建
    pub fn new_with_file(data_dir: impl AsRef<Path>) -> Self {
        Self::with_repository(Arc::new(FileConfigRepository::new(data_dir)))
    }

    /// 使用自定义仓储创建
    pub fn with_repository(repository: Arc<dyn ConfigRepository>) -> Self {
        Self {
            service: ConfigService::new(repository),
        }
    }

    /// 获取配置服务
    pub fn service(&self) -> &ConfigService {
        &self.service
    }

    /// 加载生效配置（含环境变量覆盖）
    pub async fn load(&self) -> Result<AppConfig, ConfigError> {
        self.service.load().await
    }

    /// 保存配置
    pub async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.service.save(config).await
    }

    /// 更新配置
    pub async fn update(&self, partial: PartialAppConfig) -> Result<AppConfig, ConfigError> {
        self.service.update(partial).await
    }

    /// 重置配置
    pub async fn reset(&self) -> Result<AppConfig, ConfigError> {
        self.service.reset().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_module_integration() {
        let temp_dir = TempDir::new().unwrap();
        let module = ConfigModule::new_with_file(temp_dir.path());

        // 获取默认配置
        let config = module.service().load_stored().await.unwrap();
        assert_eq!(config.storage.backend, StorageBackend::File);

        // 更新配置
        let updated = module
            .update(PartialAppConfig {
                storage: Some(PartialStorageConfig {
                    backend: Some(StorageBackend::Memory),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(updated.storage.backend, StorageBackend::Memory);

        // 新实例读到同一份文件
        let reopened = ConfigModule::new_with_file(temp_dir.path());
        assert_eq!(
            reopened.service().load_stored().await.unwrap().storage.backend,
            StorageBackend::Memory
        );

        // 重置配置
        let reset = module.reset().await.unwrap();
        assert_eq!(reset.storage.backend, StorageBackend::File);
    }
}
