// File Config Repository
//
// 基于 JSON 文件的配置仓储实现

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

use crate::modules::config::domain::AppConfig;
use crate::modules::config::ports::{ConfigError, ConfigRepository};

const CONFIG_FILE_NAME: &str = "config.json";

/// 文件配置仓储
///
/// 配置保存在数据目录下的 config.json
pub struct FileConfigRepository {
    /// 配置文件路径
    config_path: PathBuf,
    /// 内存缓存
    cache: RwLock<Option<AppConfig>>,
}

impl FileConfigRepository {
    /// 创建新的文件配置仓储
    ///
    /// # Arguments
    /// * `data_dir` - 配置文件所在目录
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: data_dir.as_ref().join(CONFIG_FILE_NAME),
            cache: RwLock::new(None),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 从文件加载配置
    ///
    /// 文件存在但无法解析时报错，不会静默回退到默认值
    async fn load_from_file(&self) -> Result<Option<AppConfig>, ConfigError> {
        if !tokio::fs::try_exists(&self.config_path).await? {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&self.config_path).await?;
        let config: AppConfig = serde_json::from_str(&content).map_err(|e| {
            ConfigError::Invalid(format!("{}: {}", self.config_path.display(), e))
        })?;

        Ok(Some(config))
    }

    /// 保存配置到文件
    async fn save_to_file(&self, config: &AppConfig) -> Result<(), ConfigError> {
        // 确保目录存在
        if let Some(parent) = self.config_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(config)?;
        tokio::fs::write(&self.config_path, content).await?;

        debug!("Config saved to {:?}", self.config_path);
        Ok(())
    }
}

#[async_trait]
impl ConfigRepository for FileConfigRepository {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        // 先检查缓存
        if let Some(config) = self.cache.read().await.as_ref() {
            return Ok(config.clone());
        }

        let config = self.load_from_file().await?.unwrap_or_default();
        *self.cache.write().await = Some(config.clone());

        Ok(config)
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        self.save_to_file(config).await?;
        *self.cache.write().await = Some(config.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ConfigError> {
        if tokio::fs::try_exists(&self.config_path).await? {
            tokio::fs::remove_file(&self.config_path).await?;
        }
        *self.cache.write().await = None;
        Ok(())
    }

    async fn exists(&self) -> Result<bool, ConfigError> {
        Ok(tokio::fs::try_exists(&self.config_path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::config::domain::StorageBackend;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();

        let mut config = AppConfig::default();
        config.storage.backend = StorageBackend::Memory;
        config.chat.poll_interval_ms = 500;

        {
            let repo = FileConfigRepository::new(temp_dir.path());
            repo.save(&config).await.unwrap();
        }

        let repo = FileConfigRepository::new(temp_dir.path());
        assert!(repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), config);
    }

    #[tokio::test]
    async fn test_missing_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileConfigRepository::new(temp_dir.path().join("nested"));

        assert!(!repo.exists().await.unwrap());
        assert_eq!(repo.load().await.unwrap(), AppConfig::default());
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        tokio::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "{ not json")
            .await
            .unwrap();

        let repo = FileConfigRepository::new(temp_dir.path());
        let result = repo.load().await;
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let repo = FileConfigRepository::new(temp_dir.path());

        repo.save(&AppConfig::default()).await.unwrap();
        assert!(repo.config_path().exists());

        repo.clear().await.unwrap();
        assert!(!repo.config_path().exists());
        // 重复清除不报错
        repo.clear().await.unwrap();
    }
}
