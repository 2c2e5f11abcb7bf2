// Chat Queries - 查询定义和处理器

mod load_conversation;

pub use load_conversation::*;
