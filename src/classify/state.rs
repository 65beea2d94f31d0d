// src/classify/state.rs
//! Status phrase classification.
//!
//! Ordered waterfall on the lower-cased text, first hit wins:
//! 1. whole text is a maintenance keyword and contains "finished" → `Down`
//! 2. whole text is a maintenance keyword                        → `Maintenance`
//! 3. contains "closed"                                           → `Up`
//! 4. contains "open"                                             → `Down`
//! 5. otherwise                                                   → `Unknown`
//!
//! "Closed" is closed to marine traffic, so the deck is down and cars cross:
//! service state `Up`. "Open" is the raised span: `Down`.

use crate::model::BridgeState;

/// Compared against the *entire* lower-cased text, not searched within it.
pub const MAINTENANCE_KEYWORDS: [&str; 3] = ["maintenance", "until further notice", "issue"];

pub fn classify(text: &str) -> BridgeState {
    let lower = text.to_lowercase();

    if MAINTENANCE_KEYWORDS.contains(&lower.as_str()) {
        // Unreachable with the current keyword list; precedence kept as-is.
        if lower.contains("finished") {
            return BridgeState::Down;
        }
        return BridgeState::Maintenance;
    }
    if lower.contains("closed") {
        return BridgeState::Up;
    }
    if lower.contains("open") {
        return BridgeState::Down;
    }
    BridgeState::Unknown
}
