use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::super::value_objects::MessageId;
use crate::shared::{timestamp_now, UserId};

/// 消息实体
///
/// 只追加：创建后不再修改或删除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// 消息唯一标识
    id: MessageId,
    /// 发送者
    sender_id: UserId,
    /// 接收者
    receiver_id: UserId,
    /// 消息内容
    text: String,
    /// 发送时间（毫秒精度）
    #[serde(with = "chrono::serde::ts_milliseconds")]
    timestamp: DateTime<Utc>,
}

impl Message {
    /// 创建新消息，时间戳为当前时间
    pub fn new(sender_id: UserId, receiver_id: UserId, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            sender_id,
            receiver_id,
            text: text.into(),
            timestamp: timestamp_now(),
        }
    }

    // Getters
    pub fn id(&self) -> &MessageId {
        &self.id
    }

    pub fn sender_id(&self) -> &UserId {
        &self.sender_id
    }

    pub fn receiver_id(&self) -> &UserId {
        &self.receiver_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// 保证时间戳严格晚于同一发送者的上一条消息
    ///
    /// 同一毫秒内连续发送时顺延 1 毫秒
    pub(crate) fn place_after(&mut self, previous: DateTime<Utc>) {
        if self.timestamp <= previous {
            self.timestamp = previous + Duration::milliseconds(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_message() {
        let msg = Message::new(UserId::new("1"), UserId::new("101"), "Olá!");

        assert_eq!(msg.sender_id().as_str(), "1");
        assert_eq!(msg.receiver_id().as_str(), "101");
        assert_eq!(msg.text(), "Olá!");
    }

    #[test]
    fn test_place_after_bumps_equal_timestamp() {
        let mut msg = Message::new(UserId::new("1"), UserId::new("2"), "a");
        let previous = msg.timestamp();

        msg.place_after(previous);
        assert_eq!(msg.timestamp(), previous + Duration::milliseconds(1));
    }

    #[test]
    fn test_place_after_keeps_later_timestamp() {
        let mut msg = Message::new(UserId::new("1"), UserId::new("2"), "a");
        let original = msg.timestamp();

        msg.place_after(original - Duration::seconds(1));
        assert_eq!(msg.timestamp(), original);
    }

    #[test]
    fn test_reads_original_storage_layout() {
        let raw = r#"{"id":"1700000000000abc123xyz","senderId":"2","receiverId":"101","text":"Oi","timestamp":1700000000000}"#;
        let msg: Message = serde_json::from_str(raw).unwrap();

        assert_eq!(msg.id().as_str(), "1700000000000abc123xyz");
        assert_eq!(msg.timestamp().timestamp_millis(), 1_700_000_000_000);
    }
}
