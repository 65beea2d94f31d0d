// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod api;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod dedup;
pub mod error;
pub mod feed;
pub mod metrics;
pub mod model;
pub mod notify;
pub mod pipeline;
pub mod scheduler;
pub mod store;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::catalog::{Catalog, CatalogEntry};
pub use crate::classify::{classify, match_bridges};
pub use crate::dedup::BatchDeduper;
pub use crate::error::ProcessError;
pub use crate::feed::{FeedSource, InboundMessage};
pub use crate::model::{BridgeRecord, BridgeState, StateChangeRequest};
pub use crate::notify::{format_notification, Notification, NotificationSink};
pub use crate::pipeline::{BatchReport, BatchSummary, UpdatePipeline};
pub use crate::store::RecordStore;
