// Triage Ports Layer

mod triage_port;

pub use triage_port::*;
