// tests/scheduler_cycle.rs
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use bridge_watch::feed::{FeedSource, InboundMessage, StaticSource};
use bridge_watch::notify::LogNotifier;
use bridge_watch::scheduler::{run_cycle, spawn_poll_scheduler};
use bridge_watch::store::InMemoryStore;
use bridge_watch::{BridgeRecord, BridgeState, Catalog, RecordStore, UpdatePipeline};

struct BrokenSource;

#[async_trait]
impl FeedSource for BrokenSource {
    async fn fetch_latest(&self) -> Result<Vec<InboundMessage>> {
        Err(anyhow!("rate limited"))
    }
    fn name(&self) -> &'static str {
        "broken"
    }
}

fn pipeline(store: Arc<InMemoryStore>) -> UpdatePipeline {
    UpdatePipeline::new(Arc::new(Catalog::default_seed()), store, Arc::new(LogNotifier))
}

#[tokio::test]
async fn all_sources_form_one_batch_and_failures_are_skipped() {
    let store = Arc::new(InMemoryStore::seeded([BridgeRecord::new(
        "Fremont Bridge",
        BridgeState::Unknown,
        "Seattle, Wa",
    )]));
    let p = pipeline(store.clone());

    let sources: Vec<Box<dyn FeedSource>> = vec![
        Box::new(StaticSource::new(vec![InboundMessage::new("a", "Fremont Bridge closed")])),
        Box::new(BrokenSource),
        Box::new(StaticSource::new(vec![InboundMessage::new("b", "Fremont Bridge open")])),
    ];

    let r = run_cycle(&sources, &p).await;
    assert_eq!(r.messages, 2);
    // Same batch: the second source's report for Fremont is deduped away.
    assert_eq!(r.requests.len(), 1);
    let rec = store.find("Fremont Bridge").await.unwrap().unwrap();
    assert_eq!(rec.state, BridgeState::Up);
}

#[tokio::test]
async fn scheduler_publishes_last_batch() {
    let store = Arc::new(InMemoryStore::seeded([BridgeRecord::new(
        "Ballard Bridge",
        BridgeState::Up,
        "Seattle, Wa",
    )]));
    let p = Arc::new(pipeline(store));
    let sources: Vec<Box<dyn FeedSource>> = vec![Box::new(StaticSource::new(vec![
        InboundMessage::new("1", "Ballard Bridge open"),
    ]))];
    let last = Arc::new(RwLock::new(None));

    let handle = spawn_poll_scheduler(Duration::from_millis(20), sources, p, last.clone());

    let mut seen = None;
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        if let Some(s) = last.read().unwrap().clone() {
            seen = Some(s);
            break;
        }
    }
    handle.abort();

    let s = seen.expect("scheduler should have run at least once");
    assert_eq!(s.messages, 1);
    assert_eq!(s.requests.len(), 1);
}
