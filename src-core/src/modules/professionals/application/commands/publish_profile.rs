use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use super::super::{CommandHandler, ProfessionalsError};
use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::professionals::domain::ProfessionalProfile;
use crate::modules::professionals::ports::ProfileRepository;

/// 发布档案命令
#[derive(Debug, Clone)]
pub struct PublishProfileCommand {
    pub profile: ProfessionalProfile,
}

/// 发布档案命令处理器
pub struct PublishProfileHandler {
    profile_repository: Arc<dyn ProfileRepository>,
    event_bus: Arc<EventBus>,
}

impl PublishProfileHandler {
    pub fn new(profile_repository: Arc<dyn ProfileRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            profile_repository,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<PublishProfileCommand, ProfessionalProfile> for PublishProfileHandler {
    async fn handle(
        &self,
        command: PublishProfileCommand,
    ) -> Result<ProfessionalProfile, ProfessionalsError> {
        let profile = command.profile;

        if profile.id.as_str().trim().is_empty() {
            return Err(ProfessionalsError::ValidationError(
                "Profile id cannot be empty".to_string(),
            ));
        }
        if profile.name.trim().is_empty() {
            return Err(ProfessionalsError::ValidationError(
                "Name cannot be empty".to_string(),
            ));
        }
        if profile.profession.trim().is_empty() {
            return Err(ProfessionalsError::ValidationError(
                "Profession cannot be empty".to_string(),
            ));
        }

        let created = self.profile_repository.upsert(&profile).await?;
        if created {
            info!("New profile published: {} ({})", profile.name, profile.id);
        }

        self.event_bus.publish(AppEvent::ProfilePublished {
            profile_id: profile.id.clone(),
        });

        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::professionals::infrastructure::StoreProfileRepository;
    use crate::modules::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_publish_validates_fields() {
        let repo = Arc::new(StoreProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let handler = PublishProfileHandler::new(repo.clone(), Arc::new(EventBus::new()));

        let result = handler
            .handle(PublishProfileCommand {
                profile: ProfessionalProfile::new("7", "Zé", "  "),
            })
            .await;

        assert!(matches!(result, Err(ProfessionalsError::ValidationError(_))));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_publish_emits_event() {
        let repo = Arc::new(StoreProfileRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let bus = Arc::new(EventBus::new());
        let mut events = bus.subscribe();
        let handler = PublishProfileHandler::new(repo, bus);

        handler
            .handle(PublishProfileCommand {
                profile: ProfessionalProfile::new("7", "Zé", "Pedreiro"),
            })
            .await
            .unwrap();

        match events.recv().await.unwrap() {
            AppEvent::ProfilePublished { profile_id } => assert_eq!(profile_id.as_str(), "7"),
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
