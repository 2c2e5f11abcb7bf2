// Chat Module - 会话存储
//
// 只追加的消息日志，按无序参与者对查询，采用六边形架构：
// - domain: 消息实体、会话键和消息 ID 值对象
// - ports: 消息仓储端口
// - infrastructure: 基于键值存储的仓储实现
// - application: 发送命令、加载查询、推送订阅和轮询观察者

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use application::{
    ChatError, CommandHandler, ConversationPoller, ConversationSubscription,
    LoadConversationHandler, LoadConversationQuery, PollerHandle, QueryHandler,
    SendMessageCommand, SendMessageHandler, DEFAULT_POLL_INTERVAL,
};
pub use domain::{ConversationKey, Message, MessageId};
pub use infrastructure::StoreMessageRepository;
pub use ports::MessageRepository;

use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::EventBus;
use crate::modules::storage::KeyValueStore;
use crate::shared::UserId;

/// Chat 模块容器
pub struct ChatModule {
    message_repository: Arc<dyn MessageRepository>,
    event_bus: Arc<EventBus>,
    send_handler: SendMessageHandler,
    load_handler: LoadConversationHandler,
    poller: ConversationPoller,
}

impl ChatModule {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        event_bus: Arc<EventBus>,
        poll_interval: Duration,
    ) -> Self {
        Self::with_repository(
            Arc::new(StoreMessageRepository::new(store)),
            event_bus,
            poll_interval,
        )
    }

    pub fn with_repository(
        message_repository: Arc<dyn MessageRepository>,
        event_bus: Arc<EventBus>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            send_handler: SendMessageHandler::new(message_repository.clone(), event_bus.clone()),
            load_handler: LoadConversationHandler::new(message_repository.clone()),
            poller: ConversationPoller::new(message_repository.clone(), poll_interval),
            message_repository,
            event_bus,
        }
    }

    /// 发送消息
    pub async fn send(
        &self,
        sender_id: impl Into<UserId>,
        receiver_id: impl Into<UserId>,
        text: impl Into<String>,
    ) -> Result<Message, ChatError> {
        self.send_handler
            .handle(SendMessageCommand::new(sender_id, receiver_id, text))
            .await
    }

    /// 加载两人之间的会话，按时间戳升序
    pub async fn load(
        &self,
        user1: impl Into<UserId>,
        user2: impl Into<UserId>,
    ) -> Result<Vec<Message>, ChatError> {
        self.load_handler
            .handle(LoadConversationQuery::new(user1, user2))
            .await
    }

    /// 订阅本进程内发送到该会话的消息
    pub fn subscribe(
        &self,
        user1: impl Into<UserId>,
        user2: impl Into<UserId>,
    ) -> ConversationSubscription {
        ConversationSubscription::new(
            ConversationKey::new(user1.into(), user2.into()),
            &self.event_bus,
        )
    }

    /// 开始轮询该会话
    pub fn poll(&self, user1: impl Into<UserId>, user2: impl Into<UserId>) -> PollerHandle {
        self.poller
            .spawn(ConversationKey::new(user1.into(), user2.into()))
    }

    pub fn message_repository(&self) -> Arc<dyn MessageRepository> {
        self.message_repository.clone()
    }
}
