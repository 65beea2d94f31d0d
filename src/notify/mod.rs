// src/notify/mod.rs
//! Outbound push notifications: the sink seam, the message formatter and
//! concrete senders.

pub mod fcm;
pub mod format;

use anyhow::Result;

pub use fcm::FcmNotifier;
pub use format::{capitalize_words, format_notification, topic_for};

/// (topic, title, body) triple handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub topic: String,
    pub title: String,
    pub body: String,
}

#[async_trait::async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, n: &Notification) -> Result<()>;
    fn name(&self) -> &'static str;
}

/// Logs instead of sending. Used when no push credentials are configured.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier;

#[async_trait::async_trait]
impl NotificationSink for LogNotifier {
    async fn send(&self, n: &Notification) -> Result<()> {
        tracing::info!(
            target: "notify",
            topic = %n.topic,
            title = %n.title,
            body = %n.body,
            "push disabled; notification logged"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
