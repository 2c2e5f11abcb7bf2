// Chat Domain - Value Objects

mod conversation_key;
mod message_id;

pub use conversation_key::*;
pub use message_id::*;
