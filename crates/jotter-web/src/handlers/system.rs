//! Liveness and store counters.

use axum::{extract::State, Json};
use jotter_db::DatabaseStats;
use serde::Serialize;

use crate::state::SharedState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
    pub notes: u64,
    pub next_id: u64,
}

/// GET /api/health
pub async fn health(State(state): State<SharedState>) -> Json<Health> {
    let DatabaseStats { notes, next_id } = state.db.stats().await;
    Json(Health {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        notes,
        next_id,
    })
}
