// Auth Domain - Entities

mod identity;

pub use identity::*;
