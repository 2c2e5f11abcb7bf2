use async_trait::async_trait;

use super::super::domain::{ConversationKey, Message};
use crate::shared::RepositoryError;

/// 消息仓储端口
///
/// 只追加的消息日志
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// 追加消息，返回实际存储的消息
    ///
    /// 时间戳会被顺延到严格晚于同一发送者的上一条消息
    async fn append(&self, message: Message) -> Result<Message, RepositoryError>;

    /// 获取两个参与者之间的全部消息，按时间戳升序
    async fn find_conversation(
        &self,
        key: &ConversationKey,
    ) -> Result<Vec<Message>, RepositoryError>;

    /// 日志中的消息总数
    async fn count(&self) -> Result<usize, RepositoryError>;
}
