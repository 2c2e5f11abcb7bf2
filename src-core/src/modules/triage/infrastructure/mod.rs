// Triage Infrastructure Layer

pub mod adapters;

pub use adapters::*;
