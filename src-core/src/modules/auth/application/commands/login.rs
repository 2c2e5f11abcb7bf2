use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::super::{AuthError, CommandHandler, SessionState};
use crate::modules::auth::domain::{Identity, PasswordHash};
use crate::modules::auth::ports::IdentityRepository;

/// 登录命令
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

impl LoginCommand {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// 登录命令处理器
pub struct LoginHandler {
    identity_repository: Arc<dyn IdentityRepository>,
    session: Arc<SessionState>,
}

impl LoginHandler {
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
impl CommandHandler<LoginCommand, Identity> for LoginHandler {
    async fn handle(&self, command: LoginCommand) -> Result<Identity, AuthError> {
        let password_hash = PasswordHash::digest(&command.password);

        let identity = self
            .identity_repository
            .find_by_credentials(&command.email, &password_hash)
            .await?
            .ok_or_else(|| {
                debug!("Login rejected: no identity matches the given credentials");
                AuthError::InvalidCredentials
            })?;

        Ok(self.session.start(&identity).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::EventBus;
    use crate::modules::auth::domain::demo_identities;
    use crate::modules::auth::infrastructure::{StoreIdentityRepository, StoreSessionRepository};
    use crate::modules::storage::{keys, InMemoryKeyValueStore, KeyValueStore};

    async fn setup() -> (Arc<InMemoryKeyValueStore>, Arc<SessionState>, LoginHandler) {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let identities = Arc::new(StoreIdentityRepository::new(store.clone()));
        identities.seed_if_absent(&demo_identities()).await.unwrap();

        let session = Arc::new(
            SessionState::restore(
                Arc::new(StoreSessionRepository::new(store.clone())),
                Arc::new(EventBus::new()),
            )
            .await
            .unwrap(),
        );
        let handler = LoginHandler::new(identities, session.clone());
        (store, session, handler)
    }

    #[tokio::test]
    async fn test_login_success() {
        let (store, session, handler) = setup().await;

        let identity = handler
            .handle(LoginCommand::new("pro@exemplo.com", "123"))
            .await
            .unwrap();

        assert_eq!(identity.name(), "Dr. Exemplo");
        assert!(identity.password_hash().is_none());
        assert_eq!(session.current().as_ref().map(|i| i.id()), Some(identity.id()));
        assert!(store.get(keys::CURRENT_USER).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (store, session, handler) = setup().await;

        let result = handler
            .handle(LoginCommand::new("pro@exemplo.com", "1234"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(session.current().is_none());
        assert!(store.get(keys::CURRENT_USER).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_login_unknown_email() {
        let (_store, _session, handler) = setup().await;

        let result = handler
            .handle(LoginCommand::new("nobody@exemplo.com", "123"))
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }
}
