// src/error.rs
//! Per-request failures collected by the update pipeline. None of them stops
//! a batch.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// Reading or writing the bridge record failed.
    #[error("store unavailable for {bridge}: {message}")]
    StoreUnavailable { bridge: String, message: String },

    /// The record was updated but the push could not be delivered.
    #[error("notification failed for {bridge}: {message}")]
    NotifyUnavailable { bridge: String, message: String },
}

impl ProcessError {
    pub fn store(bridge: &str, err: &anyhow::Error) -> Self {
        Self::StoreUnavailable {
            bridge: bridge.to_string(),
            message: format!("{err:#}"),
        }
    }

    pub fn notify(bridge: &str, err: &anyhow::Error) -> Self {
        Self::NotifyUnavailable {
            bridge: bridge.to_string(),
            message: format!("{err:#}"),
        }
    }

    pub fn bridge(&self) -> &str {
        match self {
            Self::StoreUnavailable { bridge, .. } | Self::NotifyUnavailable { bridge, .. } => bridge,
        }
    }
}
