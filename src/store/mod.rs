// src/store/mod.rs
//! Bridge record persistence seam.
//!
//! The store speaks `BridgeState`; string conversion happens inside the
//! implementations (`status` field on the wire).

pub mod http;
pub mod memory;

use anyhow::Result;

use crate::model::{BridgeRecord, BridgeState};

pub use http::HttpRecordStore;
pub use memory::InMemoryStore;

#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// `Ok(None)` when no record carries `name`.
    async fn find(&self, name: &str) -> Result<Option<BridgeRecord>>;
    /// Set the state of an existing record. Never creates records.
    async fn upsert(&self, name: &str, state: BridgeState) -> Result<()>;
}
