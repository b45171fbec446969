//! Synthetic directory generator — builds the in-memory college dataset by
//! Cartesian-combining the fixed catalogs with per-section rank arithmetic.
//!
//! Cutoffs are deterministic: section base rank + branch step × branch index
//! + state step × state index. Seat counts, ratings, and placement figures
//! are drawn from an unseeded `thread_rng`, so two runs never produce the
//! same dataset. `available_seats` is always drawn from `0..=total_seats`.
//!
//! Generation cannot fail; the whole dataset is built once at startup.

use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

use crate::directory::catalog::{
    state_index, AIIMS_CAMPUSES, ENGINEERING_BRANCHES, GOVERNMENT_MEDICAL, IITS, MEDICAL_COURSES,
    NITS, PRIVATE_ENGINEERING, PRIVATE_MEDICAL,
};
use crate::models::college::{format_inr, College, CollegeType, Exam, SeatStatus, SeatThresholds};

// ────────────────────────────────────────────────────────────────────────────
// Per-section constants
// ────────────────────────────────────────────────────────────────────────────

const IIT_BASE_RANK: u32 = 100;
const NIT_BASE_RANK: u32 = 1_200;
const PRIVATE_BASE_RANK: u32 = 15_000;
const MEDICAL_BASE_RANK: u32 = 50;
const GOV_MEDICAL_BASE_RANK: u32 = 800;
const PRIVATE_MEDICAL_BASE_RANK: u32 = 9_000;

const BRANCH_STEP: u32 = 350;
const COURSE_STEP: u32 = 600;
const STATE_STEP: u32 = 15;

pub const ENGINEERING_THRESHOLDS: SeatThresholds = SeatThresholds {
    available_above: 20,
    limited_above: 5,
};
pub const PRIVATE_THRESHOLDS: SeatThresholds = SeatThresholds {
    available_above: 30,
    limited_above: 10,
};
pub const MEDICAL_THRESHOLDS: SeatThresholds = SeatThresholds {
    available_above: 10,
    limited_above: 2,
};

// ────────────────────────────────────────────────────────────────────────────
// Dataset assembly
// ────────────────────────────────────────────────────────────────────────────

/// Builds the full synthetic directory: IIT, NIT, and private engineering
/// seats plus AIIMS, government, and private medical seats.
pub fn generate_dataset() -> Vec<College> {
    let mut rng = thread_rng();
    let mut colleges = Vec::new();
    colleges.extend(iit_section(&mut rng));
    colleges.extend(nit_section(&mut rng));
    colleges.extend(private_engineering_section(&mut rng));
    colleges.extend(medical_section(&mut rng));
    colleges
}

fn iit_section(rng: &mut ThreadRng) -> Vec<College> {
    let mut out = Vec::new();
    for (name, state) in IITS {
        for (branch_idx, branch) in ENGINEERING_BRANCHES.iter().enumerate() {
            let cutoff = IIT_BASE_RANK
                + branch_idx as u32 * BRANCH_STEP
                + state_index(state) as u32 * STATE_STEP;
            let total_seats = rng.gen_range(40..=120);
            let annual_fee = rng.gen_range(200_000..=260_000);
            out.push(make_college(
                rng,
                format!("{name} - {branch}"),
                CollegeType::Iit,
                Exam::JeeAdvanced,
                state,
                cutoff,
                annual_fee,
                total_seats,
                ENGINEERING_THRESHOLDS,
                Some("Merit-cum-Means (two-thirds fee waiver)".to_string()),
                4.1..4.9,
                85.0..99.0,
                14.0..32.0,
            ));
        }
    }
    out
}

fn nit_section(rng: &mut ThreadRng) -> Vec<College> {
    let mut out = Vec::new();
    for (idx, (name, state)) in NITS.iter().enumerate() {
        for (branch_idx, branch) in ENGINEERING_BRANCHES.iter().enumerate() {
            let cutoff = NIT_BASE_RANK
                + branch_idx as u32 * BRANCH_STEP
                + state_index(state) as u32 * STATE_STEP;
            let total_seats = rng.gen_range(60..=150);
            let annual_fee = rng.gen_range(125_000..=180_000);
            let scholarship = if idx % 2 == 0 {
                Some("Central Sector Scholarship".to_string())
            } else {
                None
            };
            out.push(make_college(
                rng,
                format!("{name} - {branch}"),
                CollegeType::Nit,
                Exam::JeeMain,
                state,
                cutoff,
                annual_fee,
                total_seats,
                ENGINEERING_THRESHOLDS,
                scholarship,
                3.8..4.6,
                75.0..95.0,
                8.0..18.0,
            ));
        }
    }
    out
}

fn private_engineering_section(rng: &mut ThreadRng) -> Vec<College> {
    let mut out = Vec::new();
    for (idx, (name, state, is_university)) in PRIVATE_ENGINEERING.iter().enumerate() {
        let college_type = if *is_university {
            CollegeType::University
        } else {
            CollegeType::Private
        };
        for (branch_idx, branch) in ENGINEERING_BRANCHES.iter().enumerate() {
            let cutoff = PRIVATE_BASE_RANK
                + branch_idx as u32 * BRANCH_STEP
                + state_index(state) as u32 * STATE_STEP;
            let total_seats = rng.gen_range(90..=240);
            let annual_fee = rng.gen_range(280_000..=450_000);
            let scholarship = if idx % 3 == 0 {
                Some("Early-admission fee waiver".to_string())
            } else {
                None
            };
            out.push(make_college(
                rng,
                format!("{name} - {branch}"),
                college_type,
                Exam::JeeMain,
                state,
                cutoff,
                annual_fee,
                total_seats,
                PRIVATE_THRESHOLDS,
                scholarship,
                3.5..4.4,
                70.0..92.0,
                5.0..12.0,
            ));
        }
    }
    out
}

fn medical_section(rng: &mut ThreadRng) -> Vec<College> {
    let mut out = Vec::new();
    let groups: [(&[(&str, &str)], CollegeType, u32, (u32, u32), Option<&str>); 3] = [
        (
            AIIMS_CAMPUSES,
            CollegeType::Aiims,
            MEDICAL_BASE_RANK,
            (5_000, 8_000),
            Some("Full tuition waiver"),
        ),
        (
            GOVERNMENT_MEDICAL,
            CollegeType::Government,
            GOV_MEDICAL_BASE_RANK,
            (40_000, 90_000),
            Some("State merit scholarship"),
        ),
        (
            PRIVATE_MEDICAL,
            CollegeType::Private,
            PRIVATE_MEDICAL_BASE_RANK,
            (900_000, 2_200_000),
            None,
        ),
    ];
    for (campuses, college_type, base_rank, fee_band, scholarship) in groups {
        for (name, state) in campuses {
            for (course_idx, course) in MEDICAL_COURSES.iter().enumerate() {
                let cutoff = base_rank
                    + course_idx as u32 * COURSE_STEP
                    + state_index(state) as u32 * STATE_STEP;
                let total_seats = rng.gen_range(20..=100);
                let annual_fee = rng.gen_range(fee_band.0..=fee_band.1);
                out.push(make_college(
                    rng,
                    format!("{name} - {course}"),
                    college_type,
                    Exam::Neet,
                    state,
                    cutoff,
                    annual_fee,
                    total_seats,
                    MEDICAL_THRESHOLDS,
                    scholarship.map(str::to_string),
                    3.9..4.8,
                    80.0..98.0,
                    10.0..25.0,
                ));
            }
        }
    }
    out
}

#[allow(clippy::too_many_arguments)]
fn make_college(
    rng: &mut ThreadRng,
    name: String,
    college_type: CollegeType,
    exam: Exam,
    state: &str,
    cutoff: u32,
    annual_fee: u32,
    total_seats: u32,
    thresholds: SeatThresholds,
    scholarship: Option<String>,
    rating_band: std::ops::Range<f32>,
    placement_band: std::ops::Range<f32>,
    package_band: std::ops::Range<f32>,
) -> College {
    // Drawn from the total, never independently: available can never exceed
    // capacity.
    let available_seats = rng.gen_range(0..=total_seats);
    College {
        name,
        college_type,
        exam,
        state: state.to_string(),
        cutoff,
        annual_fee,
        fees: format_inr(annual_fee),
        total_seats,
        available_seats,
        seat_status: SeatStatus::classify(available_seats, thresholds),
        scholarship,
        rating: round1(rng.gen_range(rating_band)),
        placement_rate: round1(rng.gen_range(placement_band)),
        average_package_lakh: round1(rng.gen_range(package_band)),
    }
}

fn round1(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::catalog::STATES;

    #[test]
    fn test_dataset_covers_every_catalog_combination() {
        let dataset = generate_dataset();
        let engineering =
            (IITS.len() + NITS.len() + PRIVATE_ENGINEERING.len()) * ENGINEERING_BRANCHES.len();
        let medical = (AIIMS_CAMPUSES.len() + GOVERNMENT_MEDICAL.len() + PRIVATE_MEDICAL.len())
            * MEDICAL_COURSES.len();
        assert_eq!(dataset.len(), engineering + medical);
    }

    #[test]
    fn test_available_seats_never_exceed_total() {
        for college in generate_dataset() {
            assert!(
                college.available_seats <= college.total_seats,
                "{}: {} available of {} total",
                college.name,
                college.available_seats,
                college.total_seats
            );
        }
    }

    #[test]
    fn test_seat_status_matches_section_thresholds() {
        for college in generate_dataset() {
            let thresholds = match college.college_type {
                CollegeType::Iit | CollegeType::Nit => ENGINEERING_THRESHOLDS,
                CollegeType::Private | CollegeType::University
                    if college.exam != Exam::Neet =>
                {
                    PRIVATE_THRESHOLDS
                }
                _ => MEDICAL_THRESHOLDS,
            };
            assert_eq!(
                college.seat_status,
                SeatStatus::classify(college.available_seats, thresholds),
                "{} has a seat status inconsistent with its section thresholds",
                college.name
            );
        }
    }

    #[test]
    fn test_cutoffs_are_index_arithmetic() {
        let mut rng = thread_rng();
        let iits = iit_section(&mut rng);
        // First institute, branch 0 vs branch 1: exactly one branch step apart.
        let first = &iits[0];
        let second = &iits[1];
        assert_eq!(second.cutoff - first.cutoff, BRANCH_STEP);
        assert_eq!(
            first.cutoff,
            IIT_BASE_RANK + state_index(&first.state) as u32 * STATE_STEP
        );
    }

    #[test]
    fn test_every_record_has_known_state_and_formatted_fees() {
        for college in generate_dataset() {
            assert!(STATES.contains(&college.state.as_str()));
            assert!(college.fees.starts_with('₹'));
            assert_eq!(college.fees, format_inr(college.annual_fee));
        }
    }

    #[test]
    fn test_exam_follows_section() {
        for college in generate_dataset() {
            match college.college_type {
                CollegeType::Iit => assert_eq!(college.exam, Exam::JeeAdvanced),
                CollegeType::Nit => assert_eq!(college.exam, Exam::JeeMain),
                CollegeType::Aiims | CollegeType::Government => {
                    assert_eq!(college.exam, Exam::Neet)
                }
                CollegeType::Private | CollegeType::University => {
                    assert!(matches!(college.exam, Exam::JeeMain | Exam::Neet))
                }
            }
        }
    }
}
