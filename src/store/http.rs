// src/store/http.rs
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use std::time::Duration;

use super::RecordStore;
use crate::model::{BridgeRecord, BridgeState};

pub const DEFAULT_STORE_URL: &str = "http://localhost:8080/bridges";

/// REST bridge store: `GET {url}` lists records, `PUT {url}` replaces one.
#[derive(Clone)]
pub struct HttpRecordStore {
    url: String,
    token: Option<String>,
    client: Client,
    timeout: Duration,
}

impl HttpRecordStore {
    pub fn new(url: String, token: Option<String>) -> Self {
        Self {
            url,
            token,
            client: Client::new(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    pub async fn list(&self) -> Result<Vec<BridgeRecord>> {
        let req = self.client.get(&self.url).timeout(self.timeout);
        let rsp = self
            .authed(req)
            .send()
            .await
            .context("bridge store GET")?
            .error_for_status()
            .context("bridge store GET non-2xx")?;
        let body = rsp.text().await.context("read bridge store body")?;
        parse_records(&body)
    }
}

fn parse_records(body: &str) -> Result<Vec<BridgeRecord>> {
    serde_json::from_str(body.trim())
        .with_context(|| format!("parse bridge list JSON failed, body: {body}"))
}

#[async_trait::async_trait]
impl RecordStore for HttpRecordStore {
    async fn find(&self, name: &str) -> Result<Option<BridgeRecord>> {
        let all = self.list().await?;
        Ok(all.into_iter().find(|r| r.name == name))
    }

    async fn upsert(&self, name: &str, state: BridgeState) -> Result<()> {
        // Re-read so the PUT carries the record's id and static fields.
        let mut rec = self
            .find(name)
            .await?
            .ok_or_else(|| anyhow!("no bridge record named '{name}'"))?;
        rec.state = state;

        let req = self
            .client
            .put(&self.url)
            .timeout(self.timeout)
            .json(&rec);
        self.authed(req)
            .send()
            .await
            .context("bridge store PUT")?
            .error_for_status()
            .context("bridge store PUT non-2xx")?;
        tracing::debug!(target: "store", bridge = %name, state = %state, id = %rec.id, "record updated");
        Ok(())
    }
}
