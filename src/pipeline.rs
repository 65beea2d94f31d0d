// src/pipeline.rs
//! Batch update pipeline: messages → name matches → per-batch dedup →
//! classification → compare with stored state → upsert + notify.
//!
//! Every request is handled independently; collaborator failures are
//! collected into the report and the batch carries on.

use chrono::{DateTime, Utc};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

use crate::catalog::Catalog;
use crate::classify::{classify, match_bridges};
use crate::dedup::BatchDeduper;
use crate::error::ProcessError;
use crate::feed::InboundMessage;
use crate::model::StateChangeRequest;
use crate::notify::{format_notification, NotificationSink};
use crate::store::RecordStore;

/// One-time metrics registration (so series show up on /metrics).
fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("pipeline_messages_total", "Inbound messages processed.");
        describe_counter!(
            "pipeline_requests_total",
            "State change requests produced after batch dedup."
        );
        describe_counter!("pipeline_updates_total", "Records whose state changed.");
        describe_counter!(
            "pipeline_unchanged_total",
            "Requests matching the stored state (no-op)."
        );
        describe_counter!(
            "pipeline_unknown_bridge_total",
            "Requests for names without a stored record."
        );
        describe_counter!(
            "pipeline_errors_total",
            "Store or notification failures."
        );
        describe_gauge!(
            "pipeline_last_run_ts",
            "Unix ts when the pipeline last ran."
        );
    });
}

/// Outcome of one `process` call.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub messages: usize,
    pub requests: Vec<StateChangeRequest>,
    pub updated: usize,
    pub notified: usize,
    pub unchanged: usize,
    pub skipped_unknown: usize,
    pub errors: Vec<ProcessError>,
}

/// Serializable digest of a `BatchReport` (exposed on /debug/last-batch).
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchSummary {
    pub ts: DateTime<Utc>,
    pub messages: usize,
    pub requests: Vec<StateChangeRequest>,
    pub updated: usize,
    pub notified: usize,
    pub unchanged: usize,
    pub skipped_unknown: usize,
    pub errors: Vec<String>,
}

impl BatchReport {
    pub fn summary(&self, ts: DateTime<Utc>) -> BatchSummary {
        BatchSummary {
            ts,
            messages: self.messages,
            requests: self.requests.clone(),
            updated: self.updated,
            notified: self.notified,
            unchanged: self.unchanged,
            skipped_unknown: self.skipped_unknown,
            errors: self.errors.iter().map(|e| e.to_string()).collect(),
        }
    }
}

enum Applied {
    Updated,
    Unchanged,
    UnknownBridge,
}

pub struct UpdatePipeline {
    catalog: Arc<Catalog>,
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl UpdatePipeline {
    pub fn new(
        catalog: Arc<Catalog>,
        store: Arc<dyn RecordStore>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Self {
        Self {
            catalog,
            store,
            notifier,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Pure half of a pass: at most one request per bridge name, first
    /// message naming a bridge wins. Uses its own fresh deduper.
    pub fn plan(&self, messages: &[InboundMessage]) -> Vec<StateChangeRequest> {
        let mut dedup = BatchDeduper::new();
        let mut out = Vec::new();
        for msg in messages {
            for name in match_bridges(&msg.text, &self.catalog) {
                if !dedup.should_process(&name) {
                    trace!(target: "pipeline", bridge = %name, id = %msg.id, "already handled in batch");
                    continue;
                }
                let proposed_state = classify(&msg.text);
                debug!(target: "pipeline", bridge = %name, state = %proposed_state, id = %msg.id, "classified");
                out.push(StateChangeRequest {
                    bridge_name: name,
                    proposed_state,
                });
            }
        }
        out
    }

    /// Run one batch. Never fails; see `BatchReport::errors`.
    pub async fn process(&self, messages: &[InboundMessage]) -> BatchReport {
        ensure_metrics_described();

        let mut report = BatchReport {
            messages: messages.len(),
            requests: self.plan(messages),
            ..Default::default()
        };
        counter!("pipeline_messages_total").increment(messages.len() as u64);
        counter!("pipeline_requests_total").increment(report.requests.len() as u64);

        for req in report.requests.clone() {
            match self.apply(&req).await {
                Ok(Applied::Updated) => {
                    report.updated += 1;
                    report.notified += 1;
                }
                Ok(Applied::Unchanged) => report.unchanged += 1,
                Ok(Applied::UnknownBridge) => report.skipped_unknown += 1,
                Err(e) => {
                    warn!(target: "pipeline", error = %e, "request failed");
                    counter!("pipeline_errors_total").increment(1);
                    // The upsert went through even though the push did not.
                    if matches!(e, ProcessError::NotifyUnavailable { .. }) {
                        report.updated += 1;
                    }
                    report.errors.push(e);
                }
            }
        }

        counter!("pipeline_updates_total").increment(report.updated as u64);
        counter!("pipeline_unchanged_total").increment(report.unchanged as u64);
        counter!("pipeline_unknown_bridge_total").increment(report.skipped_unknown as u64);
        gauge!("pipeline_last_run_ts").set(Utc::now().timestamp().max(0) as f64);

        report
    }

    async fn apply(&self, req: &StateChangeRequest) -> Result<Applied, ProcessError> {
        let name = req.bridge_name.as_str();

        let record = match self.store.find(name).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                debug!(target: "pipeline", bridge = %name, "no stored record; skipped");
                return Ok(Applied::UnknownBridge);
            }
            Err(e) => return Err(ProcessError::store(name, &e)),
        };

        if record.state == req.proposed_state {
            trace!(target: "pipeline", bridge = %name, state = %record.state, "no change");
            return Ok(Applied::Unchanged);
        }

        self.store
            .upsert(name, req.proposed_state)
            .await
            .map_err(|e| ProcessError::store(name, &e))?;
        info!(
            target: "pipeline",
            bridge = %name,
            from = %record.state,
            to = %req.proposed_state,
            "bridge state changed"
        );

        let note = format_notification(&record, req.proposed_state);
        self.notifier
            .send(&note)
            .await
            .map_err(|e| ProcessError::notify(name, &e))?;
        Ok(Applied::Updated)
    }
}
