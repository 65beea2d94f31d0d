// src/feed/twitter.rs
use anyhow::{Context, Result};
use metrics::counter;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{FeedSource, InboundMessage};

pub const TWITTER_API_BASE: &str = "https://api.twitter.com/2";

#[derive(Debug, Deserialize)]
struct TimelineResponse {
    #[serde(default)]
    data: Vec<Tweet>,
}

#[derive(Debug, Deserialize)]
struct Tweet {
    id: String,
    text: String,
}

/// Polls recent tweets of one account (`/2/users/{id}/tweets`).
#[derive(Clone)]
pub struct TwitterTimelineSource {
    base: String,
    account_id: String,
    token: String,
    client: Client,
    timeout: Duration,
}

impl TwitterTimelineSource {
    pub fn new(account_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base: TWITTER_API_BASE.to_string(),
            account_id: account_id.into(),
            token: token.into(),
            client: Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    fn timeline_url(&self) -> String {
        format!(
            "{}/users/{}/tweets",
            self.base.trim_end_matches('/'),
            self.account_id
        )
    }

    fn parse_timeline(body: &str) -> Result<Vec<InboundMessage>> {
        let rsp: TimelineResponse =
            serde_json::from_str(body).context("parsing twitter timeline json")?;
        Ok(rsp
            .data
            .into_iter()
            .map(|t| InboundMessage { id: t.id, text: t.text })
            .collect())
    }
}

#[async_trait::async_trait]
impl FeedSource for TwitterTimelineSource {
    async fn fetch_latest(&self) -> Result<Vec<InboundMessage>> {
        let body = match self
            .client
            .get(self.timeline_url())
            .bearer_auth(&self.token)
            .timeout(self.timeout)
            .send()
            .await
            .and_then(|r| r.error_for_status())
        {
            Ok(resp) => resp.text().await.context("twitter http .text()")?,
            Err(e) => {
                tracing::warn!(target: "feed", error = ?e, account = %self.account_id, "twitter http error");
                counter!("feed_errors_total").increment(1);
                return Err(e).context("twitter http get()");
            }
        };
        let out = Self::parse_timeline(&body)?;
        tracing::debug!(target: "feed", account = %self.account_id, n = out.len(), "timeline fetched");
        Ok(out)
    }

    fn name(&self) -> &'static str {
        "twitter"
    }
}
