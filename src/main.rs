//! Bridge Watch — Binary Entrypoint
//! Loads config + catalog, starts the feed poller and serves health/metrics.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use bridge_watch::api::{self, AppState};
use bridge_watch::config::AppConfig;
use bridge_watch::feed::{FeedSource, TwitterTimelineSource};
use bridge_watch::metrics::Metrics;
use bridge_watch::notify::{FcmNotifier, LogNotifier, NotificationSink};
use bridge_watch::scheduler::spawn_poll_scheduler;
use bridge_watch::store::HttpRecordStore;
use bridge_watch::{Catalog, UpdatePipeline};
use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Compact text logs by default; `BRIDGE_WATCH_LOG_JSON=1` switches to JSON lines.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bridge_watch=info,warn"));
    let json = std::env::var("BRIDGE_WATCH_LOG_JSON").ok().is_some_and(|v| v == "1");

    // The runtime may already have installed a subscriber.
    let res = if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
    };
    if res.is_err() {
        warn!("tracing subscriber already set; keeping existing one");
    }
}

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = AppConfig::from_env();
    let catalog = Arc::new(Catalog::load_default()?);
    info!(bridges = catalog.len(), interval = cfg.poll_interval_secs, "catalog loaded");

    let metrics = Metrics::init(cfg.poll_interval_secs)?;

    let store = Arc::new(HttpRecordStore::new(cfg.store_url.clone(), cfg.store_token.clone()));
    let notifier: Arc<dyn NotificationSink> = match &cfg.fcm_token {
        Some(token) => Arc::new(FcmNotifier::new(cfg.fcm_url.clone(), token.clone())),
        None => {
            warn!("FCM_BEARER_TOKEN not set; notifications will only be logged");
            Arc::new(LogNotifier)
        }
    };
    let pipeline = Arc::new(UpdatePipeline::new(catalog, store, notifier));

    let sources: Vec<Box<dyn FeedSource>> = match &cfg.twitter_token {
        Some(token) => cfg
            .twitter_account_ids
            .iter()
            .map(|id| Box::new(TwitterTimelineSource::new(id.clone(), token.clone())) as Box<dyn FeedSource>)
            .collect(),
        None => {
            warn!("TWITTER_BEARER_TOKEN not set; no feed will be polled");
            Vec::new()
        }
    };

    let last_batch = Arc::new(RwLock::new(None));
    spawn_poll_scheduler(
        Duration::from_secs(cfg.poll_interval_secs),
        sources,
        pipeline,
        last_batch.clone(),
    );

    let router = api::router(AppState { last_batch }).merge(metrics.router());
    Ok(router.into())
}
