use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::super::{ChatError, CommandHandler};
use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::Message;
use crate::modules::chat::ports::MessageRepository;
use crate::shared::UserId;

/// 发送消息命令
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub sender_id: UserId,
    pub receiver_id: UserId,
    pub text: String,
}

impl SendMessageCommand {
    pub fn new(
        sender_id: impl Into<UserId>,
        receiver_id: impl Into<UserId>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            receiver_id: receiver_id.into(),
            text: text.into(),
        }
    }
}

/// 发送消息命令处理器
pub struct SendMessageHandler {
    message_repository: Arc<dyn MessageRepository>,
    event_bus: Arc<EventBus>,
}

impl SendMessageHandler {
    pub fn new(message_repository: Arc<dyn MessageRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            message_repository,
            event_bus,
        }
    }
}

#[async_trait]
impl CommandHandler<SendMessageCommand, Message> for SendMessageHandler {
    async fn handle(&self, command: SendMessageCommand) -> Result<Message, ChatError> {
        // 验证输入
        if command.text.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let message = Message::new(command.sender_id, command.receiver_id, command.text);
        let stored = self.message_repository.append(message).await?;

        debug!(
            "Message {} sent from {} to {}",
            stored.id(),
            stored.sender_id(),
            stored.receiver_id()
        );
        self.event_bus.publish(AppEvent::MessageSent(stored.clone()));

        Ok(stored)
    }
}
