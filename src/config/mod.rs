// src/config/mod.rs
//! Runtime configuration from the environment (`.env` is loaded by the binary).

use std::env;

use crate::notify::fcm::DEFAULT_FCM_SEND_URL;
use crate::store::http::DEFAULT_STORE_URL;

pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_TWITTER_ACCOUNT_IDS: &str = "2768116808,936366064518160384";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store_url: String,
    pub store_token: Option<String>,
    pub fcm_url: String,
    /// `None` → notifications are only logged.
    pub fcm_token: Option<String>,
    /// `None` → no feed source is polled.
    pub twitter_token: Option<String>,
    pub twitter_account_ids: Vec<String>,
    pub poll_interval_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            store_url: env::var("BRIDGE_STORE_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string()),
            store_token: non_empty_env("BRIDGE_STORE_TOKEN"),
            fcm_url: env::var("FCM_SEND_URL").unwrap_or_else(|_| DEFAULT_FCM_SEND_URL.to_string()),
            fcm_token: non_empty_env("FCM_BEARER_TOKEN"),
            twitter_token: non_empty_env("TWITTER_BEARER_TOKEN"),
            twitter_account_ids: parse_id_list(
                &env::var("TWITTER_ACCOUNT_IDS")
                    .unwrap_or_else(|_| DEFAULT_TWITTER_ACCOUNT_IDS.to_string()),
            ),
            poll_interval_secs: parse_interval(env::var("POLL_INTERVAL_SECS").ok()),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_id_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// parse optional interval env; unparsable → default, clamp to >= 1s
fn parse_interval(raw: Option<String>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_POLL_INTERVAL_SECS)
        .max(1)
}
