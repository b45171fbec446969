//! Directory filtering — a flat set of optional predicates applied in one
//! pass over the in-memory dataset.

use serde::Deserialize;

use crate::models::college::{College, CollegeType, Exam};
use crate::predict::eligibility::is_rank_eligible;

/// Query parameters accepted by `GET /api/v1/colleges`. Every field is
/// optional; absent fields filter nothing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollegeQuery {
    pub state: Option<String>,
    pub college_type: Option<CollegeType>,
    pub exam: Option<Exam>,
    pub min_fee: Option<u32>,
    pub max_fee: Option<u32>,
    /// Candidate rank; keeps only records the rank is eligible for.
    pub rank: Option<u32>,
    pub limit: Option<usize>,
}

/// Applies each present predicate, then truncates to `limit`.
pub fn filter_colleges(colleges: &[College], query: &CollegeQuery) -> Vec<College> {
    let mut matched: Vec<College> = colleges
        .iter()
        .filter(|c| matches_query(c, query))
        .cloned()
        .collect();
    if let Some(limit) = query.limit {
        matched.truncate(limit);
    }
    matched
}

fn matches_query(college: &College, query: &CollegeQuery) -> bool {
    if let Some(state) = &query.state {
        if !college.state.eq_ignore_ascii_case(state) {
            return false;
        }
    }
    if let Some(college_type) = query.college_type {
        if college.college_type != college_type {
            return false;
        }
    }
    if let Some(exam) = query.exam {
        if college.exam != exam {
            return false;
        }
    }
    if let Some(min_fee) = query.min_fee {
        if college.annual_fee < min_fee {
            return false;
        }
    }
    if let Some(max_fee) = query.max_fee {
        if college.annual_fee > max_fee {
            return false;
        }
    }
    if let Some(rank) = query.rank {
        if !is_rank_eligible(rank, college.cutoff) {
            return false;
        }
    }
    true
}
