use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::errors::AppError;
use crate::models::college::{Category, Exam};
use crate::state::AppState;
use crate::upstream::UpstreamError;

const RECOMMENDATIONS_PATH: &str = "/api/recommendations";

/// Caller-facing parameter names for the recommendation proxy. All optional;
/// whatever is present is re-shaped into the upstream's names and forwarded.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationQuery {
    pub rank: Option<u32>,
    pub category: Option<Category>,
    pub exam: Option<Exam>,
    pub state: Option<String>,
    pub min_fee: Option<u32>,
    pub max_fee: Option<u32>,
    pub limit: Option<usize>,
}

/// Maps our parameter names onto the upstream's.
pub fn upstream_params(query: &RecommendationQuery) -> Vec<(String, String)> {
    let mut params = Vec::new();
    if let Some(rank) = query.rank {
        params.push(("user_rank".to_string(), rank.to_string()));
    }
    if let Some(category) = query.category {
        params.push(("category".to_string(), category.as_str().to_string()));
    }
    if let Some(exam) = query.exam {
        let label = match exam {
            Exam::JeeMain => "JEE Main",
            Exam::JeeAdvanced => "JEE Advanced",
            Exam::Neet => "NEET",
        };
        params.push(("exam_type".to_string(), label.to_string()));
    }
    if let Some(state) = &query.state {
        params.push(("state".to_string(), state.clone()));
    }
    if let Some(min_fee) = query.min_fee {
        params.push(("min_fee".to_string(), min_fee.to_string()));
    }
    if let Some(max_fee) = query.max_fee {
        params.push(("max_fee".to_string(), max_fee.to_string()));
    }
    if let Some(limit) = query.limit {
        params.push(("max_results".to_string(), limit.to_string()));
    }
    params
}

/// GET /api/v1/recommendations
///
/// Upstream status and body are surfaced verbatim; a transport failure
/// yields `200 []` so the result cards simply render empty.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(query): Query<RecommendationQuery>,
) -> Result<Json<Value>, AppError> {
    let params = upstream_params(&query);
    match state.upstream.forward(RECOMMENDATIONS_PATH, &params).await {
        Ok(body) => Ok(Json(body)),
        Err(UpstreamError::Status { status, body }) => {
            Err(AppError::Upstream { status, body })
        }
        Err(UpstreamError::Transport(e)) => {
            warn!("Recommendation upstream unreachable: {e}");
            Ok(Json(json!([])))
        }
    }
}
