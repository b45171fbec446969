use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::college::{Category, CutoffRecord, Exam};
use crate::predict::eligibility::is_eligible;
use crate::predict::grouping::{group_by_category, group_by_rank_bucket, group_by_state};
use crate::state::AppState;

/// Query parameters for `GET /api/v1/predict`. Exam and rank are required;
/// the rest narrow the result.
#[derive(Debug, Deserialize)]
pub struct PredictQuery {
    pub exam: Exam,
    pub rank: u32,
    pub category: Option<Category>,
    pub state: Option<String>,
    pub limit: Option<usize>,
}

/// Pure core of the prediction endpoint.
pub fn predict(rows: &[CutoffRecord], query: &PredictQuery) -> Vec<CutoffRecord> {
    let mut matched: Vec<CutoffRecord> = rows
        .iter()
        .filter(|row| is_eligible(row, query.exam, query.rank))
        .filter(|row| query.category.map_or(true, |c| row.category == c))
        .filter(|row| {
            query
                .state
                .as_deref()
                .map_or(true, |s| row.state.eq_ignore_ascii_case(s))
        })
        .cloned()
        .collect();
    if let Some(limit) = query.limit {
        matched.truncate(limit);
    }
    matched
}

/// GET /api/v1/predict
pub async fn handle_predict(
    State(state): State<AppState>,
    Query(query): Query<PredictQuery>,
) -> Result<Json<Vec<CutoffRecord>>, AppError> {
    Ok(Json(predict(&state.cutoffs, &query)))
}

/// GET /api/v1/predict/by-state
pub async fn handle_predict_by_state(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<CutoffRecord>>> {
    Json(group_by_state(&state.cutoffs))
}

/// GET /api/v1/predict/by-category
pub async fn handle_predict_by_category(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<CutoffRecord>>> {
    Json(group_by_category(&state.cutoffs))
}

#[derive(Debug, Deserialize)]
pub struct RankBucketQuery {
    pub exam: Exam,
}

/// GET /api/v1/predict/by-rank
pub async fn handle_predict_by_rank(
    State(state): State<AppState>,
    Query(query): Query<RankBucketQuery>,
) -> Json<BTreeMap<String, Vec<CutoffRecord>>> {
    Json(group_by_rank_bucket(&state.cutoffs, query.exam))
}
