use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

use crate::modules::chat::domain::{ConversationKey, Message};
use crate::modules::chat::ports::MessageRepository;

/// 默认轮询间隔
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// 会话轮询器
///
/// 按固定间隔重新加载会话，内容变化时才通知观察者。
/// 陈旧度不超过一个间隔
pub struct ConversationPoller {
    message_repository: Arc<dyn MessageRepository>,
    period: Duration,
}

impl ConversationPoller {
    pub fn new(message_repository: Arc<dyn MessageRepository>, period: Duration) -> Self {
        Self {
            message_repository,
            period,
        }
    }

    /// 启动后台轮询任务
    ///
    /// 第一次加载立即进行；句柄被丢弃时任务停止
    pub fn spawn(&self, key: ConversationKey) -> PollerHandle {
        let (sender, receiver) = watch::channel(Vec::new());
        let repository = self.message_repository.clone();
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                match repository.find_conversation(&key).await {
                    Ok(latest) => {
                        let changed = sender.send_if_modified(|current| {
                            if *current == latest {
                                false
                            } else {
                                *current = latest;
                                true
                            }
                        });
                        if changed {
                            debug!("Conversation {:?} changed", key.participants());
                        }
                    }
                    Err(e) => warn!("Failed to poll conversation: {}", e),
                }

                if sender.is_closed() {
                    debug!("All conversation observers dropped, poller exiting");
                    break;
                }
            }
        });

        PollerHandle { receiver, task }
    }
}

/// 轮询任务句柄
pub struct PollerHandle {
    receiver: watch::Receiver<Vec<Message>>,
    task: JoinHandle<()>,
}

impl PollerHandle {
    /// 最近一次加载到的会话
    pub fn latest(&self) -> Vec<Message> {
        self.receiver.borrow().clone()
    }

    /// 等待下一次变化并返回新的会话
    ///
    /// 任务已停止时返回 None
    pub async fn changed(&mut self) -> Option<Vec<Message>> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Message>> {
        self.receiver.clone()
    }

    pub fn stop(self) {
        self.task.abort();
    }
}

impl Drop for PollerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
