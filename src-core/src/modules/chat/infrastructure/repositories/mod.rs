mod store_message_repository;

pub use store_message_repository::*;
