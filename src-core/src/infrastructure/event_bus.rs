use tokio::sync::broadcast;

use crate::modules::auth::Identity;
use crate::modules::chat::Message;
use crate::modules::notifications::Notification;
use crate::shared::UserId;

const EVENT_BUS_CAPACITY: usize = 256;

#[derive(Clone, Debug)]
pub enum AppEvent {
    /// 会话开始或结束；结束时为 None
    SessionChanged { identity: Option<Identity> },
    MessageSent(Message),
    NotificationPushed(Notification),
    ProfilePublished { profile_id: UserId },
}

impl AppEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            AppEvent::SessionChanged { .. } => "session.changed",
            AppEvent::MessageSent(_) => "message.sent",
            AppEvent::NotificationPushed(_) => "notification.pushed",
            AppEvent::ProfilePublished { .. } => "profile.published",
        }
    }
}

/// 进程内事件总线
///
/// 没有订阅者时事件直接丢弃
pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(EVENT_BUS_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn publish(&self, event: AppEvent) {
        tracing::debug!("[EventBus] Publishing event: {}", event.event_type());
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
