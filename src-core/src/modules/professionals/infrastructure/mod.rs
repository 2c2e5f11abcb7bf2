// Professionals Infrastructure Layer

pub mod repositories;

pub use repositories::{StoreFavoritesRepository, StoreProfileRepository};
