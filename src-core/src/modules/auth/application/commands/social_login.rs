use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

use super::super::{AuthError, CommandHandler, SessionState};
use crate::modules::auth::domain::{Identity, Role};
use crate::modules::auth::ports::IdentityRepository;
use crate::shared::RepositoryError;

/// 社交登录命令
#[derive(Debug, Clone)]
pub struct SocialLoginCommand {
    pub provider: String,
    pub role: Role,
}

impl SocialLoginCommand {
    pub fn new(provider: impl Into<String>, role: Role) -> Self {
        Self {
            provider: provider.into(),
            role,
        }
    }
}

/// 社交登录命令处理器
pub struct SocialLoginHandler {
    identity_repository: Arc<dyn IdentityRepository>,
    session: Arc<SessionState>,
}

impl SocialLoginHandler {
    pub fn new(
        identity_repository: Arc<dyn IdentityRepository>,
        session: Arc<SessionState>,
    ) -> Self {
        Self {
            identity_repository,
            session,
        }
    }

    /// 返回身份以及它是否由本次调用写入
    async fn find_or_insert(&self, candidate: Identity) -> Result<(Identity, bool), AuthError> {
        if let Some(existing) = self
            .identity_repository
            .find_by_email(candidate.email())
            .await?
        {
            debug!("Reusing identity {} for social login", existing.id());
            return Ok((existing, false));
        }

        match self.identity_repository.insert(&candidate).await {
            Ok(()) => Ok((candidate, true)),
            // 并发插入了同一邮箱时复用已存在的身份
            Err(RepositoryError::Conflict(reason)) => self
                .identity_repository
                .find_by_email(candidate.email())
                .await?
                .map(|existing| (existing, false))
                .ok_or(AuthError::RepositoryError(RepositoryError::Conflict(reason))),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl CommandHandler<SocialLoginCommand, Identity> for SocialLoginHandler {
    async fn handle(&self, command: SocialLoginCommand) -> Result<Identity, AuthError> {
        if command.provider.trim().is_empty() {
            return Err(AuthError::ValidationError(
                "provider cannot be empty".to_string(),
            ));
        }

        let candidate = Identity::social(&command.provider, command.role);
        let (identity, inserted) = self.find_or_insert(candidate).await?;

        match self.session.start(&identity).await {
            Ok(current) => Ok(current),
            Err(e) => {
                // 只撤回本次新增的身份，已有身份保持不变
                if inserted {
                    if let Err(rollback) = self.identity_repository.remove(identity.id()).await {
                        warn!(
                            "Failed to roll back identity {} after session error: {}",
                            identity.id(),
                            rollback
                        );
                    }
                }
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::EventBus;
    use crate::modules::auth::infrastructure::{StoreIdentityRepository, StoreSessionRepository};
    use crate::modules::storage::{keys, InMemoryKeyValueStore, RejectingKeyValueStore};

    async fn setup() -> (Arc<StoreIdentityRepository>, SocialLoginHandler) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let identities = Arc::new(StoreIdentityRepository::new(store.clone()));
        let session = Arc::new(
            SessionState::restore(
                Arc::new(StoreSessionRepository::new(store)),
                Arc::new(EventBus::new()),
            )
            .await
            .unwrap(),
        );
        let handler = SocialLoginHandler::new(identities.clone(), session);
        (identities, handler)
    }

    #[tokio::test]
    async fn test_first_social_login_adds_identity() {
        let (identities, handler) = setup().await;

        let identity = handler
            .handle(SocialLoginCommand::new("Google", Role::Client))
            .await
            .unwrap();

        assert_eq!(identity.email(), "user@google.com");
        assert_eq!(identities.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_repeated_social_login_reuses_identity() {
        let (identities, handler) = setup().await;

        let first = handler
            .handle(SocialLoginCommand::new("Google", Role::Client))
            .await
            .unwrap();
        // 角色不同也复用已存在的身份
        let second = handler
            .handle(SocialLoginCommand::new("google", Role::Professional))
            .await
            .unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(second.role(), Role::Client);
        assert_eq!(identities.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_empty_provider_rejected() {
        let (identities, handler) = setup().await;

        let result = handler
            .handle(SocialLoginCommand::new("  ", Role::Client))
            .await;

        assert!(matches!(result, Err(AuthError::ValidationError(_))));
        assert_eq!(identities.count().await.unwrap(), 0);
    }

    async fn rejecting_setup() -> (
        Arc<StoreIdentityRepository>,
        Arc<SessionState>,
        SocialLoginHandler,
    ) {
        let store = Arc::new(RejectingKeyValueStore::new(keys::CURRENT_USER));
        let identities = Arc::new(StoreIdentityRepository::new(store.clone()));
        let session = Arc::new(
            SessionState::restore(
                Arc::new(StoreSessionRepository::new(store)),
                Arc::new(EventBus::new()),
            )
            .await
            .unwrap(),
        );
        let handler = SocialLoginHandler::new(identities.clone(), session.clone());
        (identities, session, handler)
    }

    #[tokio::test]
    async fn test_social_login_rolls_back_new_identity_when_session_fails() {
        let (identities, session, handler) = rejecting_setup().await;

        let result = handler
            .handle(SocialLoginCommand::new("Google", Role::Client))
            .await;

        assert!(matches!(result, Err(AuthError::RepositoryError(_))));
        assert!(session.current().is_none());
        assert_eq!(identities.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_social_login_keeps_existing_identity_when_session_fails() {
        let (identities, session, handler) = rejecting_setup().await;
        let existing = Identity::social("Google", Role::Client);
        identities.insert(&existing).await.unwrap();

        let result = handler
            .handle(SocialLoginCommand::new("Google", Role::Client))
            .await;

        assert!(result.is_err());
        assert!(session.current().is_none());
        assert_eq!(identities.count().await.unwrap(), 1);
    }
}
