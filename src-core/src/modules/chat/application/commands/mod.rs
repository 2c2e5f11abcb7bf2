// Chat Commands - 命令定义和处理器

mod send_message;

pub use send_message::*;
