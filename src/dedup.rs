// src/dedup.rs
//! Per-batch "already handled" set.
//!
//! One instance per pipeline pass. Sharing an instance across concurrent
//! passes breaks the at-most-once-per-batch guarantee.

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct BatchDeduper {
    seen: HashSet<String>,
}

impl BatchDeduper {
    pub fn new() -> Self {
        Self::default()
    }

    /// True (and records `name`) the first time a name is seen in this batch.
    pub fn should_process(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string())
    }

    pub fn reset(&mut self) {
        self.seen.clear();
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}
