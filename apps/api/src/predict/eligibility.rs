//! Rank eligibility — the admission heuristic behind every prediction
//! endpoint. A candidate is shown a seat when their rank is within one and
//! a half times the seat's historical closing rank.

use crate::models::college::{CutoffRecord, Exam};

/// `true` iff `user_rank <= cutoff * 1.5`, computed in integers
/// (`2 * rank <= 3 * cutoff`) so the margin is exact at the boundary.
pub fn is_rank_eligible(user_rank: u32, cutoff: u32) -> bool {
    u64::from(user_rank) * 2 <= u64::from(cutoff) * 3
}

/// The closing rank a cutoff row publishes for the given exam, if the
/// institute admits through it.
pub fn cutoff_for(record: &CutoffRecord, exam: Exam) -> Option<u32> {
    match exam {
        Exam::JeeMain => record.cutoff_jee_main,
        Exam::JeeAdvanced => record.cutoff_jee_advanced,
        Exam::Neet => record.cutoff_neet,
    }
}

/// Rows without a cutoff for the selected exam are excluded outright.
pub fn is_eligible(record: &CutoffRecord, exam: Exam, user_rank: u32) -> bool {
    match cutoff_for(record, exam) {
        Some(cutoff) => is_rank_eligible(user_rank, cutoff),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::college::Category;

    fn make_record(jee_main: Option<u32>) -> CutoffRecord {
        CutoffRecord {
            institute: "NIT Trichy".to_string(),
            state: "Tamil Nadu".to_string(),
            category: Category::General,
            cutoff_jee_main: jee_main,
            cutoff_jee_advanced: None,
            cutoff_neet: None,
            annual_fee: Some(150_000),
        }
    }

    #[test]
    fn test_rank_within_margin_is_eligible() {
        // cutoff 100 → margin 150: rank 140 in, rank 160 out.
        assert!(is_rank_eligible(140, 100));
        assert!(!is_rank_eligible(160, 100));
    }

    #[test]
    fn test_margin_boundary_is_inclusive() {
        assert!(is_rank_eligible(150, 100));
        assert!(!is_rank_eligible(151, 100));
        // Odd cutoff: 1.5 × 101 = 151.5, so 151 is in and 152 is out.
        assert!(is_rank_eligible(151, 101));
        assert!(!is_rank_eligible(152, 101));
    }

    #[test]
    fn test_large_ranks_do_not_overflow() {
        assert!(is_rank_eligible(u32::MAX, u32::MAX));
        assert!(!is_rank_eligible(u32::MAX, u32::MAX / 2));
    }

    #[test]
    fn test_record_without_exam_cutoff_is_excluded() {
        let record = make_record(None);
        assert!(!is_eligible(&record, Exam::JeeMain, 1));
    }

    #[test]
    fn test_end_to_end_scenario() {
        let record = make_record(Some(100));
        assert!(is_eligible(&record, Exam::JeeMain, 140));
        assert!(!is_eligible(&record, Exam::JeeMain, 160));
        // The same record is invisible to a NEET query.
        assert!(!is_eligible(&record, Exam::Neet, 140));
    }
}
