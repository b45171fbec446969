use std::collections::BTreeMap;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::directory::query::{filter_colleges, CollegeQuery};
use crate::errors::AppError;
use crate::models::college::College;
use crate::state::AppState;

/// GET /api/v1/colleges
pub async fn handle_list_colleges(
    State(state): State<AppState>,
    Query(query): Query<CollegeQuery>,
) -> Result<Json<Vec<College>>, AppError> {
    Ok(Json(filter_colleges(&state.colleges, &query)))
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub name: String,
}

/// GET /api/v1/colleges/find
///
/// Exact-name lookup backing the result-card detail view.
pub async fn handle_find_college(
    State(state): State<AppState>,
    Query(query): Query<FindQuery>,
) -> Result<Json<College>, AppError> {
    state
        .colleges
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(&query.name))
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No college named '{}'", query.name)))
}

/// GET /api/v1/colleges/by-state
///
/// Groups the whole directory by state. Every record lands in exactly one
/// bucket.
pub async fn handle_colleges_by_state(
    State(state): State<AppState>,
) -> Json<BTreeMap<String, Vec<College>>> {
    let mut grouped: BTreeMap<String, Vec<College>> = BTreeMap::new();
    for college in state.colleges.iter() {
        grouped
            .entry(college.state.clone())
            .or_default()
            .push(college.clone());
    }
    Json(grouped)
}
