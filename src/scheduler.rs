// src/scheduler.rs
//! Periodic poll loop. One tick = one batch = one fresh deduper.

use chrono::Utc;
use metrics::counter;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::feed::{FeedSource, InboundMessage};
use crate::pipeline::{BatchReport, BatchSummary, UpdatePipeline};

/// Most recent batch digest, shared with the HTTP layer.
pub type LastBatch = Arc<RwLock<Option<BatchSummary>>>;

/// Fetch every source (failures logged + skipped), concatenate in source
/// order, and run the result through the pipeline as a single batch.
pub async fn run_cycle(sources: &[Box<dyn FeedSource>], pipeline: &UpdatePipeline) -> BatchReport {
    let mut batch: Vec<InboundMessage> = Vec::new();
    for s in sources {
        match s.fetch_latest().await {
            Ok(mut v) => batch.append(&mut v),
            Err(e) => {
                tracing::warn!(target: "feed", error = ?e, source = s.name(), "source error");
                counter!("feed_errors_total").increment(1);
            }
        }
    }
    pipeline.process(&batch).await
}

pub fn spawn_poll_scheduler(
    interval: Duration,
    sources: Vec<Box<dyn FeedSource>>,
    pipeline: Arc<UpdatePipeline>,
    last: LastBatch,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;

            let report = run_cycle(&sources, &pipeline).await;
            counter!("feed_poll_runs_total").increment(1);

            tracing::info!(
                target: "feed",
                messages = report.messages,
                requests = report.requests.len(),
                updated = report.updated,
                errors = report.errors.len(),
                "poll tick"
            );

            match last.write() {
                Ok(mut g) => *g = Some(report.summary(Utc::now())),
                Err(_) => tracing::warn!(target: "feed", "last-batch lock poisoned"),
            }
        }
    })
}
