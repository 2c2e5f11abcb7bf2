// Chat Domain Layer
// 领域层包含消息实体和会话参与者值对象

pub mod entities;
pub mod value_objects;

pub use entities::Message;
pub use value_objects::{ConversationKey, MessageId};
