mod store_favorites_repository;
mod store_profile_repository;

pub use store_favorites_repository::*;
pub use store_profile_repository::*;
