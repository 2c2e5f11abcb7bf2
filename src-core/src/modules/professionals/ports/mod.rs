// Professionals Ports Layer

mod favorites_repository;
mod profile_repository;

pub use favorites_repository::*;
pub use profile_repository::*;
