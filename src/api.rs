use axum::{extract::State, routing::get, Json, Router};
use tower_http::cors::CorsLayer;

use crate::pipeline::BatchSummary;
use crate::scheduler::LastBatch;

#[derive(Clone)]
pub struct AppState {
    pub last_batch: LastBatch,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/debug/last-batch", get(debug_last_batch))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn debug_last_batch(State(state): State<AppState>) -> Json<Option<BatchSummary>> {
    let snap = match state.last_batch.read() {
        Ok(g) => g.clone(),
        Err(_) => None,
    };
    Json(snap)
}
