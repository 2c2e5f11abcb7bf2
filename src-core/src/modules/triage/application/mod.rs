// Triage Application Layer

mod service;

pub use service::*;
