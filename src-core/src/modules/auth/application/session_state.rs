// 当前会话状态
//
// 内存中的当前身份通过 watch 通道对外可观察，每次变化都同步通知；
// 持久化副本先写入，写入失败时内存状态保持不变

use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::infrastructure::{AppEvent, EventBus};
use crate::modules::auth::domain::Identity;
use crate::modules::auth::ports::SessionRepository;
use crate::shared::RepositoryError;

pub struct SessionState {
    repository: Arc<dyn SessionRepository>,
    sender: watch::Sender<Option<Identity>>,
    event_bus: Arc<EventBus>,
}

impl SessionState {
    /// 创建会话状态并恢复持久化的会话
    pub async fn restore(
        repository: Arc<dyn SessionRepository>,
        event_bus: Arc<EventBus>,
    ) -> Result<Self, RepositoryError> {
        let restored = repository.load().await?;
        if let Some(identity) = &restored {
            info!("Restored session for identity {}", identity.id());
        }

        let (sender, _) = watch::channel(restored);
        Ok(Self {
            repository,
            sender,
            event_bus,
        })
    }

    /// 以给定身份开始会话，返回去除密码摘要后的副本
    pub async fn start(&self, identity: &Identity) -> Result<Identity, RepositoryError> {
        let safe = identity.sanitized();
        self.repository.save(&safe).await?;
        self.sender.send_replace(Some(safe.clone()));

        info!("Session started for identity {}", safe.id());
        self.event_bus.publish(AppEvent::SessionChanged {
            identity: Some(safe.clone()),
        });
        Ok(safe)
    }

    /// 结束会话；没有会话时同样成功
    pub async fn end(&self) -> Result<(), RepositoryError> {
        self.repository.clear().await?;
        let previous = self.sender.send_replace(None);

        if let Some(identity) = previous {
            info!("Session ended for identity {}", identity.id());
            self.event_bus
                .publish(AppEvent::SessionChanged { identity: None });
        }
        Ok(())
    }

    pub fn current(&self) -> Option<Identity> {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.sender.subscribe()
    }
}
