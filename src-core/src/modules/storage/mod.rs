// Storage Module - 持久化键值存储
//
// 替代浏览器 localStorage 的持久化层：
// - ports: 键值存储端口定义
// - infrastructure: 内存实现和文件实现
// - codec: 集合级别的 JSON 读写辅助函数

pub mod codec;
pub mod infrastructure;
pub mod ports;

pub use codec::{read_collection, read_json, write_json};
pub use infrastructure::{FileKeyValueStore, InMemoryKeyValueStore};
#[cfg(test)]
pub(crate) use infrastructure::RejectingKeyValueStore;
pub use ports::{KeyValueStore, StorageError};

/// 各集合在持久化存储中的固定键名
///
/// 与 Web 客户端的 localStorage 键保持一致，便于迁移已有数据
pub mod keys {
    /// 身份表
    pub const USERS: &str = "ajude_users_db";
    /// 当前会话
    pub const CURRENT_USER: &str = "ajude_current_user";
    /// 聊天消息日志
    pub const CHAT_MESSAGES: &str = "ajude_chat_messages";
    /// 专业人士资料
    pub const PROFESSIONALS: &str = "ajude_professionals_db";
    /// 收藏列表
    pub const FAVORITES: &str = "ajude_favorites";
}
