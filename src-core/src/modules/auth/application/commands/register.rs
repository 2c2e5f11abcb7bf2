use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::super::{AuthError, CommandHandler, SessionState};
use crate::modules::auth::domain::{Identity, Role};
use crate::modules::auth::ports::IdentityRepository;
use crate::shared::RepositoryError;

/// 注册命令
#[derive(Debug, Clone)]
pub struct RegisterCommand {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub profession: Option<String>,
    pub phone: Option<String>,
}

impl RegisterCommand {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            role,
            profession: None,
            phone: None,
        }
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    fn validate(&self) -> Result<(), AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::ValidationError("name cannot be empty".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AuthError::ValidationError("email cannot be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(AuthError::ValidationError(
                "password cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// 注册命令处理器
pub struct RegisterHandler {
    identity_repository: Arc<dyn IdentityRepository>,
    session: Arc<SessionState>,
}

impl RegisterHandler {
    pub fn new(
        identity_repository: Arc<dyn IdentityRepository>,
        session: Arc<SessionState>,
    ) -> Self {
        Self {
            identity_repository,
            session,
        }
    }
}

#[async_trait]
impl CommandHandler<RegisterCommand, Identity> for RegisterHandler {
    async fn handle(&self, command: RegisterCommand) -> Result<Identity, AuthError> {
        command.validate()?;

        let mut identity =
            Identity::register(&command.name, &command.email, &command.password, command.role);
        if let Some(profession) = command.profession {
            identity = identity.with_profession(profession);
        }
        if let Some(phone) = command.phone {
            identity = identity.with_phone(phone);
        }

        match self.identity_repository.insert(&identity).await {
            Ok(()) => {}
            Err(RepositoryError::Conflict(_)) => {
                return Err(AuthError::EmailAlreadyRegistered(command.email));
            }
            Err(e) => return Err(e.into()),
        }

        match self.session.start(&identity).await {
            Ok(current) => Ok(current),
            Err(e) => {
                // 会话未建立时撤回刚写入的身份
                if let Err(rollback) = self.identity_repository.remove(identity.id()).await {
                    warn!(
                        "Failed to roll back identity {} after session error: {}",
                        identity.id(),
                        rollback
                    );
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
    use crate::modules::auth::domain::PasswordHash;
    use crate::modules::auth::infrastructure::{StoreIdentityRepository, StoreSessionRepository};
    use crate::modules::storage::{
        keys, InMemoryKeyValueStore, KeyValueStore, RejectingKeyValueStore,
    };

    async fn setup() -> (
        Arc<InMemoryKeyValueStore>,
        Arc<StoreIdentityRepository>,
        Arc<SessionState>,
        RegisterHandler,
    ) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let identities = Arc::new(StoreIdentityRepository::new(store.clone()));
        let session = Arc::new(
            SessionState::restore(
                Arc::new(StoreSessionRepository::new(store.clone())),
                Arc::new(EventBus::new()),
            )
            .await
            .unwrap(),
        );
        let handler = RegisterHandler::new(identities.clone(), session.clone());
        (store, identities, session, handler)
    }

    #[tokio::test]
    async fn test_register_starts_session() {
        let (store, identities, session, handler) = setup().await;

        let command = RegisterCommand::new("Carla", "carla@example.com", "pw", Role::Professional)
            .with_profession("Eletricista")
            .with_phone("31900000000");
        let identity = handler.handle(command).await.unwrap();

        assert_eq!(identity.profession(), Some("Eletricista"));
        assert!(identity.password_hash().is_none());
        assert_eq!(session.current().as_ref().map(|i| i.id()), Some(identity.id()));

        // 目录中保存的是摘要而不是明文
        let stored = identities
            .find_by_email("carla@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash(), Some(&PasswordHash::digest("pw")));
        let raw = store.get(keys::USERS).await.unwrap().unwrap();
        assert!(!raw.contains("\"pw\""));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let (_store, identities, session, handler) = setup().await;

        let first = handler
            .handle(RegisterCommand::new("Ana", "ana@example.com", "pw", Role::Client))
            .await
            .unwrap();
        let result = handler
            .handle(RegisterCommand::new("Ana 2", "ana@example.com", "other", Role::Client))
            .await;

        assert!(matches!(result, Err(AuthError::EmailAlreadyRegistered(_))));
        assert_eq!(identities.count().await.unwrap(), 1);
        // 失败的注册不影响已有会话
        assert_eq!(session.current().as_ref().map(|i| i.id()), Some(first.id()));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_password() {
        let (_store, identities, _session, handler) = setup().await;

        let result = handler
            .handle(RegisterCommand::new("Ana", "ana@example.com", "", Role::Client))
            .await;

        assert!(matches!(result, Err(AuthError::ValidationError(_))));
        assert_eq!(identities.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_register_rolls_back_when_session_fails() {
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
        let handler = RegisterHandler::new(identities.clone(), session.clone());

        let result = handler
            .handle(RegisterCommand::new("Ana", "ana@example.com", "pw", Role::Client))
            .await;

        assert!(matches!(result, Err(AuthError::RepositoryError(_))));
        assert!(session.current().is_none());
        assert_eq!(identities.count().await.unwrap(), 0);
        assert!(identities
            .find_by_email("ana@example.com")
            .await
            .unwrap()
            .is_none());
    }
}
