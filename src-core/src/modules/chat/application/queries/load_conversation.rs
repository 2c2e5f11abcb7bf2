use async_trait::async_trait;
use std::sync::Arc;

use super::super::{ChatError, QueryHandler};
use crate::modules::chat::domain::{ConversationKey, Message};
use crate::modules::chat::ports::MessageRepository;
use crate::shared::UserId;

/// 加载会话查询
///
/// 参与者顺序无关
#[derive(Debug, Clone)]
pub struct LoadConversationQuery {
    pub key: ConversationKey,
}

impl LoadConversationQuery {
    pub fn new(user1: impl Into<UserId>, user2: impl Into<UserId>) -> Self {
        Self {
            key: ConversationKey::new(user1.into(), user2.into()),
        }
    }
}

/// 加载会话查询处理器
pub struct LoadConversationHandler {
    message_repository: Arc<dyn MessageRepository>,
}

impl LoadConversationHandler {
    pub fn new(message_repository: Arc<dyn MessageRepository>) -> Self {
        Self { message_repository }
    }
}

#[async_trait]
impl QueryHandler<LoadConversationQuery, Vec<Message>> for LoadConversationHandler {
    async fn handle(&self, query: LoadConversationQuery) -> Result<Vec<Message>, ChatError> {
        Ok(self.message_repository.find_conversation(&query.key).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::infrastructure::StoreMessageRepository;
    use crate::modules::storage::InMemoryKeyValueStore;

    #[tokio::test]
    async fn test_load_is_argument_order_independent() {
        let repo = Arc::new(StoreMessageRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let handler = LoadConversationHandler::new(repo.clone());

        let m1 = repo
            .append(Message::new(UserId::new("a"), UserId::new("b"), "t1"))
            .await
            .unwrap();
        let m2 = repo
            .append(Message::new(UserId::new("b"), UserId::new("a"), "t2"))
            .await
            .unwrap();

        let ab = handler
            .handle(LoadConversationQuery::new("a", "b"))
            .await
            .unwrap();
        let ba = handler
            .handle(LoadConversationQuery::new("b", "a"))
            .await
            .unwrap();

        assert_eq!(ab, vec![m1, m2]);
        assert_eq!(ab, ba);
    }

    #[tokio::test]
    async fn test_load_empty_conversation() {
        let repo = Arc::new(StoreMessageRepository::new(Arc::new(
            InMemoryKeyValueStore::new(),
        )));
        let handler = LoadConversationHandler::new(repo);

        let messages = handler
            .handle(LoadConversationQuery::new("a", "b"))
            .await
            .unwrap();
        assert!(messages.is_empty());
    }
}
