// Auth Domain - Value Objects

mod password_hash;

pub use password_hash::*;
