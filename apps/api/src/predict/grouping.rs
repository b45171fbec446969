//! Grouped views over the cutoff snapshot. Each grouping is total: every
//! input row lands in exactly one bucket, so bucket sizes always sum to the
//! input size.

use std::collections::BTreeMap;

use crate::models::college::{CutoffRecord, Exam};
use crate::predict::eligibility::cutoff_for;

pub fn group_by_state(rows: &[CutoffRecord]) -> BTreeMap<String, Vec<CutoffRecord>> {
    let mut grouped: BTreeMap<String, Vec<CutoffRecord>> = BTreeMap::new();
    for row in rows {
        grouped.entry(row.state.clone()).or_default().push(row.clone());
    }
    grouped
}

pub fn group_by_category(rows: &[CutoffRecord]) -> BTreeMap<String, Vec<CutoffRecord>> {
    let mut grouped: BTreeMap<String, Vec<CutoffRecord>> = BTreeMap::new();
    for row in rows {
        grouped
            .entry(row.category.as_str().to_string())
            .or_default()
            .push(row.clone());
    }
    grouped
}

/// Bucket labels, most competitive first. `unlisted` holds rows without a
/// cutoff for the selected exam so the grouping stays total.
pub const RANK_BUCKETS: &[&str] = &[
    "top-100",
    "top-1000",
    "top-5000",
    "top-20000",
    "above-20000",
    "unlisted",
];

pub fn bucket_label(cutoff: Option<u32>) -> &'static str {
    match cutoff {
        Some(c) if c <= 100 => "top-100",
        Some(c) if c <= 1_000 => "top-1000",
        Some(c) if c <= 5_000 => "top-5000",
        Some(c) if c <= 20_000 => "top-20000",
        Some(_) => "above-20000",
        None => "unlisted",
    }
}

/// Buckets rows by the selected exam's cutoff. Every bucket appears in the
/// output, empty or not, so the front-end can render a stable set of
/// sections.
pub fn group_by_rank_bucket(
    rows: &[CutoffRecord],
    exam: Exam,
) -> BTreeMap<String, Vec<CutoffRecord>> {
    let mut grouped: BTreeMap<String, Vec<CutoffRecord>> = RANK_BUCKETS
        .iter()
        .map(|label| (label.to_string(), Vec::new()))
        .collect();
    for row in rows {
        let label = bucket_label(cutoff_for(row, exam));
        grouped.entry(label.to_string()).or_default().push(row.clone());
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::college::Category;

    fn make_row(
        institute: &str,
        state: &str,
        category: Category,
        jee_main: Option<u32>,
    ) -> CutoffRecord {
        CutoffRecord {
            institute: institute.to_string(),
            state: state.to_string(),
            category,
            cutoff_jee_main: jee_main,
            cutoff_jee_advanced: None,
            cutoff_neet: None,
            annual_fee: None,
        }
    }

    fn sample() -> Vec<CutoffRecord> {
        vec![
            make_row("NIT Trichy", "Tamil Nadu", Category::General, Some(90)),
            make_row("NIT Trichy", "Tamil Nadu", Category::Obc, Some(950)),
            make_row("NIT Warangal", "Telangana", Category::General, Some(4_000)),
            make_row("NIT Warangal", "Telangana", Category::Sc, Some(18_000)),
            make_row("NIT Silchar", "Assam", Category::General, Some(45_000)),
            make_row("CMC Vellore", "Tamil Nadu", Category::General, None),
        ]
    }

    fn total_grouped(grouped: &BTreeMap<String, Vec<CutoffRecord>>) -> usize {
        grouped.values().map(Vec::len).sum()
    }

    #[test]
    fn test_state_grouping_is_total() {
        let rows = sample();
        let grouped = group_by_state(&rows);
        assert_eq!(total_grouped(&grouped), rows.len());
        assert_eq!(grouped["Tamil Nadu"].len(), 3);
        assert_eq!(grouped["Assam"].len(), 1);
    }

    #[test]
    fn test_category_grouping_is_total() {
        let rows = sample();
        let grouped = group_by_category(&rows);
        assert_eq!(total_grouped(&grouped), rows.len());
        assert_eq!(grouped["General"].len(), 4);
        assert_eq!(grouped["OBC"].len(), 1);
        assert_eq!(grouped["SC"].len(), 1);
    }

    #[test]
    fn test_bucket_label_boundaries() {
        assert_eq!(bucket_label(Some(100)), "top-100");
        assert_eq!(bucket_label(Some(101)), "top-1000");
        assert_eq!(bucket_label(Some(1_000)), "top-1000");
        assert_eq!(bucket_label(Some(5_001)), "top-20000");
        assert_eq!(bucket_label(Some(20_001)), "above-20000");
        assert_eq!(bucket_label(None), "unlisted");
    }

    #[test]
    fn test_rank_bucket_grouping_is_total_with_unlisted() {
        let rows = sample();
        let grouped = group_by_rank_bucket(&rows, Exam::JeeMain);
        assert_eq!(total_grouped(&grouped), rows.len());
        assert_eq!(grouped["top-100"].len(), 1);
        assert_eq!(grouped["unlisted"].len(), 1);
        // All buckets present even when empty.
        assert_eq!(grouped.len(), RANK_BUCKETS.len());
        for label in grouped.keys() {
            assert!(
                RANK_BUCKETS.contains(&label.as_str()),
                "unexpected bucket '{label}'"
            );
        }
    }
}
