mod store_identity_repository;
mod store_session_repository;

pub use store_identity_repository::*;
pub use store_session_repository::*;
