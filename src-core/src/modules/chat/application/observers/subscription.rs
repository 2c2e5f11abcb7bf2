use futures::stream::{self, Stream};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::chat::domain::{ConversationKey, Message};

/// 某个会话的推送订阅
///
/// 只能看到本进程发送的消息；其他进程的写入需要靠轮询发现
pub struct ConversationSubscription {
    key: ConversationKey,
    receiver: broadcast::Receiver<AppEvent>,
}

impl ConversationSubscription {
    pub fn new(key: ConversationKey, event_bus: &EventBus) -> Self {
        Self {
            key,
            receiver: event_bus.subscribe(),
        }
    }

    pub fn key(&self) -> &ConversationKey {
        &self.key
    }

    /// 等待该会话的下一条消息；总线关闭时返回 None
    pub async fn next(&mut self) -> Option<Message> {
        loop {
            match self.receiver.recv().await {
                Ok(AppEvent::MessageSent(message)) if self.key.contains(&message) => {
                    return Some(message);
                }
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    // 丢失的消息仍在日志里，调用方可以重新 load
                    warn!(
                        "Conversation subscriber lagged, {} events skipped",
                        skipped
                    );
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    pub fn into_stream(self) -> impl Stream<Item = Message> {
        stream::unfold(self, |mut subscription| async move {
            subscription
                .next()
                .await
                .map(|message| (message, subscription))
        })
    }
}
