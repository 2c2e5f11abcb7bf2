use super::super::entities::Message;
use crate::shared::UserId;

/// 会话键：两个参与者组成的无序对
///
/// `ConversationKey::new(a, b) == ConversationKey::new(b, a)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConversationKey {
    low: UserId,
    high: UserId,
}

impl ConversationKey {
    pub fn new(a: UserId, b: UserId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    pub fn participants(&self) -> (&UserId, &UserId) {
        (&self.low, &self.high)
    }

    /// 消息的 {发送者, 接收者} 是否正好是这一对
    pub fn contains(&self, message: &Message) -> bool {
        Self::new(message.sender_id().clone(), message.receiver_id().clone()) == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> UserId {
        UserId::new(s)
    }

    #[test]
    fn test_key_is_order_independent() {
        assert_eq!(
            ConversationKey::new(id("a"), id("b")),
            ConversationKey::new(id("b"), id("a"))
        );
    }

    #[test]
    fn test_contains_both_directions() {
        let key = ConversationKey::new(id("a"), id("b"));

        assert!(key.contains(&Message::new(id("a"), id("b"), "hi")));
        assert!(key.contains(&Message::new(id("b"), id("a"), "hello")));
        assert!(!key.contains(&Message::new(id("a"), id("c"), "hey")));
        assert!(!key.contains(&Message::new(id("a"), id("a"), "note to self")));
    }

    #[test]
    fn test_self_conversation() {
        let key = ConversationKey::new(id("a"), id("a"));
        assert!(key.contains(&Message::new(id("a"), id("a"), "note")));
        assert!(!key.contains(&Message::new(id("a"), id("b"), "hi")));
    }
}
