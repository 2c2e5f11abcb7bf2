// 基于键值存储的消息日志
//
// 全部消息以一个 JSON 数组存放在单个键下；追加就是一次完整的读-改-写。
// 多个进程同时写入时可能互相覆盖对方的追加，但日志本身始终是完整可解析的

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::modules::chat::domain::{ConversationKey, Message};
use crate::modules::chat::ports::MessageRepository;
use crate::modules::storage::{keys, read_collection, write_json, KeyValueStore};
use crate::shared::RepositoryError;

/// 键值存储消息仓储
pub struct StoreMessageRepository {
    store: Arc<dyn KeyValueStore>,
    key: String,
    write_lock: Mutex<()>,
}

impl StoreMessageRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            key: keys::CHAT_MESSAGES.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    async fn load_all(&self) -> Result<Vec<Message>, RepositoryError> {
        Ok(read_collection(self.store.as_ref(), &self.key).await?)
    }
}

#[async_trait]
impl MessageRepository for StoreMessageRepository {
    async fn append(&self, mut message: Message) -> Result<Message, RepositoryError> {
        let _guard = self.write_lock.lock().await;
        let mut messages = self.load_all().await?;

        let previous = messages
            .iter()
            .filter(|m| m.sender_id() == message.sender_id())
            .map(|m| m.timestamp())
            .max();
        if let Some(previous) = previous {
            message.place_after(previous);
        }

        messages.push(message.clone());
        write_json(self.store.as_ref(), &self.key, &messages).await?;

        debug!(
            "Message {} appended ({} in log)",
            message.id(),
            messages.len()
        );
        Ok(message)
    }

    async fn find_conversation(
        &self,
        key: &ConversationKey,
    ) -> Result<Vec<Message>, RepositoryError> {
        let mut conversation: Vec<Message> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|m| key.contains(m))
            .collect();

        // 稳定排序：同一时间戳保持日志顺序
        conversation.sort_by_key(|m| m.timestamp());
        Ok(conversation)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.load_all().await?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::InMemoryKeyValueStore;
    use crate::shared::UserId;
    use tempfile::TempDir;

    fn id(s: &str) -> UserId {
        UserId::new(s)
    }

    #[tokio::test]
    async fn test_append_and_find_conversation() {
        let repo = StoreMessageRepository::new(Arc::new(InMemoryKeyValueStore::new()));

        repo.append(Message::new(id("a"), id("b"), "1")).await.unwrap();
        repo.append(Message::new(id("c"), id("a"), "other")).await.unwrap();
        repo.append(Message::new(id("b"), id("a"), "2")).await.unwrap();

        let conversation = repo
            .find_conversation(&ConversationKey::new(id("b"), id("a")))
            .await
            .unwrap();

        let texts: Vec<&str> = conversation.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["1", "2"]);
        assert_eq!(repo.count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_timestamps_strictly_increase_per_sender() {
        let repo = StoreMessageRepository::new(Arc::new(InMemoryKeyValueStore::new()));

        let mut stored = Vec::new();
        for i in 0..20 {
            stored.push(
                repo.append(Message::new(id("a"), id("b"), format!("burst {}", i)))
                    .await
                    .unwrap(),
            );
        }

        for pair in stored.windows(2) {
            assert!(pair[0].timestamp() < pair[1].timestamp());
        }
    }

    #[tokio::test]
    async fn test_sorts_by_timestamp_not_insertion() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        // 另一个标签页先写入了较晚的消息
        let raw = r#"[
            {"id":"m2","senderId":"b","receiverId":"a","text":"later","timestamp":2000},
            {"id":"m1","senderId":"a","receiverId":"b","text":"earlier","timestamp":1000}
        ]"#;
        store.set(keys::CHAT_MESSAGES, raw.to_string()).await.unwrap();
        let repo = StoreMessageRepository::new(store);

        let conversation = repo
            .find_conversation(&ConversationKey::new(id("a"), id("b")))
            .await
            .unwrap();

        let ids: Vec<&str> = conversation.iter().map(|m| m.id().as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2"]);
    }

    #[tokio::test]
    async fn test_corrupt_log_reads_as_empty() {
        let store = Arc::new(InMemoryKeyValueStore::with_entries([(
            keys::CHAT_MESSAGES,
            "not a log",
        )]));
        let repo = StoreMessageRepository::new(store);

        assert_eq!(repo.count().await.unwrap(), 0);

        // 下一次追加会用新日志覆盖损坏的内容
        repo.append(Message::new(id("a"), id("b"), "fresh")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_log_shared_between_processes() {
        use crate::modules::storage::FileKeyValueStore;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().to_path_buf();
        let tab_a = StoreMessageRepository::new(Arc::new(
            FileKeyValueStore::new(path.clone()).await.unwrap(),
        ));
        let tab_b =
            StoreMessageRepository::new(Arc::new(FileKeyValueStore::new(path).await.unwrap()));

        tab_a.append(Message::new(id("a"), id("b"), "from a")).await.unwrap();
        tab_b.append(Message::new(id("b"), id("a"), "from b")).await.unwrap();

        let key = ConversationKey::new(id("a"), id("b"));
        let seen_by_a = tab_a.find_conversation(&key).await.unwrap();
        let seen_by_b = tab_b.find_conversation(&key).await.unwrap();

        assert_eq!(seen_by_a.len(), 2);
        assert_eq!(seen_by_a, seen_by_b);
    }
}
