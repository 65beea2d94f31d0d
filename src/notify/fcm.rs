// src/notify/fcm.rs
use super::{Notification, NotificationSink};
use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_FCM_SEND_URL: &str = "https://fcm.googleapis.com/fcm/send";

/// Firebase Cloud Messaging (legacy HTTP API) topic sender.
#[derive(Clone)]
pub struct FcmNotifier {
    url: String,
    token: String,
    client: Client,
    timeout: Duration,
    max_retries: u8,
}

impl FcmNotifier {
    pub fn new(url: String, token: String) -> Self {
        Self {
            url,
            token,
            client: Client::new(),
            timeout: Duration::from_secs(5),
            max_retries: 3,
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries.max(1);
        self
    }
}

#[async_trait::async_trait]
impl NotificationSink for FcmNotifier {
    async fn send(&self, n: &Notification) -> Result<()> {
        let payload = FcmPayload::topic(n);

        let mut attempt: u8 = 0;
        loop {
            attempt += 1;
            let res = self
                .client
                .post(&self.url)
                .bearer_auth(&self.token)
                .timeout(self.timeout)
                .json(&payload)
                .send()
                .await;

            match res {
                Ok(rsp) => {
                    if let Err(e) = rsp.error_for_status_ref() {
                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(500u64 << (attempt - 1))).await;
                            continue;
                        }
                        return Err(anyhow!("FCM HTTP error: {e}"));
                    }
                    tracing::debug!(target: "notify", topic = %n.topic, "fcm accepted");
                    return Ok(());
                }
                Err(e) => {
                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(500u64 << (attempt - 1))).await;
                        continue;
                    }
                    return Err(anyhow!("FCM request failed: {e}"));
                }
            }
        }
    }

    fn name(&self) -> &'static str {
        "fcm"
    }
}

#[derive(Debug, Serialize)]
struct FcmNotificationBody {
    title: String,
    body: String,
    badge: u32,
    sound: &'static str,
    content_available: bool,
}

#[derive(Debug, Serialize)]
struct FcmData {
    interruption_level: u8,
}

#[derive(Debug, Serialize)]
struct FcmPayload {
    to: String,
    priority: &'static str,
    mutable_content: bool,
    notification: FcmNotificationBody,
    data: FcmData,
}

impl FcmPayload {
    fn topic(n: &Notification) -> Self {
        Self {
            to: format!("/topics/{}", n.topic),
            priority: "high",
            mutable_content: true,
            notification: FcmNotificationBody {
                title: n.title.clone(),
                body: n.body.clone(),
                badge: 0,
                sound: "default",
                content_available: true,
            },
            // time-sensitive on iOS
            data: FcmData {
                interruption_level: 3,
            },
        }
    }
}
