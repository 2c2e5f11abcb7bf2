pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use infrastructure::EventBus;
use modules::config::{AppConfig, StorageBackend};
use modules::storage::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
use modules::triage::create_triage_port;
use modules::{
    AuthModule, ChatModule, ConfigModule, NotificationCenter, ProfessionalsModule, TriageService,
};
use shared::AppResult;

/// 初始化日志
///
/// 级别由 RUST_LOG 控制，默认 info；重复调用不会报错
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

/// 应用容器
///
/// 启动时创建所有模块并注入共享的存储和事件总线，关闭时整体丢弃
pub struct Ajude {
    config: AppConfig,
    store: Arc<dyn KeyValueStore>,
    event_bus: Arc<EventBus>,
    auth: AuthModule,
    chat: ChatModule,
    professionals: ProfessionalsModule,
    notifications: NotificationCenter,
    triage: TriageService,
}

impl Ajude {
    /// 按配置创建存储适配器并装配全部模块
    pub async fn bootstrap(config: AppConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.storage.backend {
            StorageBackend::Memory => Arc::new(InMemoryKeyValueStore::new()),
            StorageBackend::File => {
                Arc::new(FileKeyValueStore::new(config.storage.data_dir.clone()).await?)
            }
        };

        Self::with_store(config, store).await
    }

    /// 读取目录下的 config.json（含环境变量覆盖）后启动
    ///
    /// 相对的数据目录按配置目录解析，与进程工作目录无关
    pub async fn open(config_dir: impl AsRef<Path>) -> AppResult<Self> {
        let config_dir = config_dir.as_ref();
        let mut config = ConfigModule::new_with_file(config_dir).load().await?;
        if config.storage.data_dir.is_relative() {
            config.storage.data_dir = config_dir.join(&config.storage.data_dir);
        }
        Self::bootstrap(config).await
    }

    /// 纯内存实例，用于测试和开发
    pub async fn in_memory() -> AppResult<Self> {
        Self::bootstrap(AppConfig::in_memory()).await
    }

    /// 使用给定的存储装配
    pub async fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        tracing::info!(
            "Ajude starting with {} storage",
            config.storage.backend.as_str()
        );

        let event_bus = Arc::new(EventBus::new());

        let auth = AuthModule::new(store.clone(), event_bus.clone()).await?;
        let chat = ChatModule::new(
            store.clone(),
            event_bus.clone(),
            config.chat.poll_interval(),
        );
        let professionals = ProfessionalsModule::new(store.clone(), event_bus.clone());
        let notifications = NotificationCenter::new(event_bus.clone());
        let triage = TriageService::new(create_triage_port(&config.triage)?);

        if config.seed_demo_data {
            if auth.seed_demo_directory().await? {
                tracing::info!("Seeded demo identities");
            }
            if professionals.seed_demo_profiles().await? {
                tracing::info!("Seeded demo professional profiles");
            }
        }

        Ok(Self {
            config,
            store,
            event_bus,
            auth,
            chat,
            professionals,
            notifications,
            triage,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn event_bus(&self) -> Arc<EventBus> {
        self.event_bus.clone()
    }

    pub fn auth(&self) -> &AuthModule {
        &self.auth
    }

    pub fn chat(&self) -> &ChatModule {
        &self.chat
    }

    pub fn professionals(&self) -> &ProfessionalsModule {
        &self.professionals
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn triage(&self) -> &TriageService {
        &self.triage
    }
}
