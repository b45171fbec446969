use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Service identity plus dataset sizes, cheap enough for liveness probes.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "admitpath-api",
        "colleges": state.colleges.len(),
        "cutoff_records": state.cutoffs.len(),
        "upstream": state.config.upstream_base_url,
        "chat_enabled": state.chat.is_some(),
    }))
}
