// src/classify/mod.rs
//! Text → bridge identity and text → state. Both halves are pure.

pub mod names;
pub mod state;

pub use names::match_bridges;
pub use state::{classify, MAINTENANCE_KEYWORDS};
