// Notifications Module - 应用内通知中心
//
// 只保存在内存中，最新的通知在前。系统通知权限和提示音不在这里处理

pub mod domain;

pub use domain::{Notification, NotificationKind};

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::infrastructure::{AppEvent, EventBus};

/// 通知中心
pub struct NotificationCenter {
    notifications: RwLock<Vec<Notification>>,
    event_bus: Arc<EventBus>,
}

impl NotificationCenter {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            notifications: RwLock::new(Vec::new()),
            event_bus,
        }
    }

    /// 推送一条通知，并发布到事件总线
    pub async fn push(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Notification {
        let notification = Notification::new(title, message, kind);
        self.notifications
            .write()
            .await
            .insert(0, notification.clone());

        debug!("Notification pushed: {}", notification.title());
        self.event_bus
            .publish(AppEvent::NotificationPushed(notification.clone()));
        notification
    }

    /// 标记为已读；返回是否找到该通知
    pub async fn mark_as_read(&self, id: &str) -> bool {
        let mut notifications = self.notifications.write().await;
        match notifications.iter_mut().find(|n| n.id() == id) {
            Some(notification) => {
                notification.mark_read();
                true
            }
            None => false,
        }
    }

    pub async fn mark_all_as_read(&self) {
        for notification in self.notifications.write().await.iter_mut() {
            notification.mark_read();
        }
    }

    pub async fn unread_count(&self) -> usize {
        self.notifications
            .read()
            .await
            .iter()
            .filter(|n| !n.is_read())
            .count()
    }

    /// 全部通知，最新的在前
    pub async fn list(&self) -> Vec<Notification> {
        self.notifications.read().await.clone()
    }
}
