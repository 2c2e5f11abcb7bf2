// Triage Domain Layer

mod suggestion;

pub use suggestion::*;
