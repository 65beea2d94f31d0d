// src/feed/mod.rs
//! Inbound status reports. A source yields raw messages; nothing here
//! interprets the text.

pub mod twitter;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use twitter::TwitterTimelineSource;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundMessage {
    pub id: String,   // feed-side identifier, logging only
    pub text: String, // raw, unnormalized
}

impl InboundMessage {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

#[async_trait::async_trait]
pub trait FeedSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<InboundMessage>>;
    fn name(&self) -> &'static str;
}

/// Fixed message list (tests, demos).
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    messages: Vec<InboundMessage>,
}

impl StaticSource {
    pub fn new(messages: Vec<InboundMessage>) -> Self {
        Self { messages }
    }
}

#[async_trait::async_trait]
impl FeedSource for StaticSource {
    async fn fetch_latest(&self) -> Result<Vec<InboundMessage>> {
        Ok(self.messages.clone())
    }

    fn name(&self) -> &'static str {
        "static"
    }
}
