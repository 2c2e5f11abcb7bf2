// Auth Module - 认证模块
//
// 会话存储与身份目录，采用六边形架构：
// - domain: 身份实体、密码摘要值对象、演示数据
// - ports: 身份目录和会话持久化端口
// - infrastructure: 基于键值存储的仓储实现
// - application: 登录、注册、社交登录和登出命令处理器

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    AuthError, CommandHandler, LoginCommand, LoginHandler, LogoutCommand, LogoutHandler,
    RegisterCommand, RegisterHandler, SessionState, SocialLoginCommand, SocialLoginHandler,
};
pub use domain::{demo_identities, Identity, PasswordHash, Role};
pub use infrastructure::{StoreIdentityRepository, StoreSessionRepository};
pub use ports::{IdentityRepository, SessionRepository};

use std::sync::Arc;
use tokio::sync::watch;

use crate::infrastructure::EventBus;
use crate::modules::storage::KeyValueStore;

/// Auth 模块容器
///
/// 持有当前会话，并对外提供认证相关的全部入口
pub struct AuthModule {
    identity_repository: Arc<dyn IdentityRepository>,
    session: Arc<SessionState>,
    login_handler: LoginHandler,
    register_handler: RegisterHandler,
    social_login_handler: SocialLoginHandler,
    logout_handler: LogoutHandler,
}

impl AuthModule {
    /// 基于键值存储创建，并恢复持久化的会话
    pub async fn new(
        store: Arc<dyn KeyValueStore>,
        event_bus: Arc<EventBus>,
    ) -> Result<Self, AuthError> {
        let identity_repository: Arc<dyn IdentityRepository> =
            Arc::new(StoreIdentityRepository::new(store.clone()));
        let session_repository: Arc<dyn SessionRepository> =
            Arc::new(StoreSessionRepository::new(store));

        Self::with_repositories(identity_repository, session_repository, event_bus).await
    }

    /// 使用自定义仓储创建
    pub async fn with_repositories(
        identity_repository: Arc<dyn IdentityRepository>,
        session_repository: Arc<dyn SessionRepository>,
        event_bus: Arc<EventBus>,
    ) -> Result<Self, AuthError> {
        let session = Arc::new(SessionState::restore(session_repository, event_bus).await?);

        Ok(Self {
            login_handler: LoginHandler::new(identity_repository.clone(), session.clone()),
            register_handler: RegisterHandler::new(identity_repository.clone(), session.clone()),
            social_login_handler: SocialLoginHandler::new(
                identity_repository.clone(),
                session.clone(),
            ),
            logout_handler: LogoutHandler::new(session.clone()),
            identity_repository,
            session,
        })
    }

    /// 身份表从未写入时写入演示身份
    pub async fn seed_demo_directory(&self) -> Result<bool, AuthError> {
        Ok(self
            .identity_repository
            .seed_if_absent(&demo_identities())
            .await?)
    }

    // Command handlers

    /// 邮箱密码登录
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        self.login_handler
            .handle(LoginCommand::new(email, password))
            .await
    }

    /// 注册并登录
    pub async fn register(&self, command: RegisterCommand) -> Result<Identity, AuthError> {
        self.register_handler.handle(command).await
    }

    /// 社交登录
    pub async fn social_login(&self, provider: &str, role: Role) -> Result<Identity, AuthError> {
        self.social_login_handler
            .handle(SocialLoginCommand::new(provider, role))
            .await
    }

    /// 登出（幂等）
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.logout_handler.handle(LogoutCommand).await
    }

    // Queries

    /// 当前会话身份
    pub fn current_identity(&self) -> Option<Identity> {
        self.session.current()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_identity().is_some()
    }

    /// 订阅会话变化
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.session.subscribe()
    }

    /// 身份目录（按插入顺序）
    pub async fn directory(&self) -> Result<Vec<Identity>, AuthError> {
        Ok(self.identity_repository.list().await?)
    }
}
