use serde::{Deserialize, Serialize};

/// Institutional category of a college.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollegeType {
    #[serde(rename = "IIT")]
    Iit,
    #[serde(rename = "NIT")]
    Nit,
    #[serde(rename = "AIIMS")]
    Aiims,
    Government,
    Private,
    University,
}

/// Entrance exam a seat is admitted through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Exam {
    #[serde(rename = "JEE Main")]
    JeeMain,
    #[serde(rename = "JEE Advanced")]
    JeeAdvanced,
    #[serde(rename = "NEET")]
    Neet,
}

/// Government reservation class. Affects which cutoff row applies to a
/// candidate and fee concessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    General,
    #[serde(rename = "OBC")]
    Obc,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "ST")]
    St,
    #[serde(rename = "PWD")]
    Pwd,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Obc => "OBC",
            Category::Sc => "SC",
            Category::St => "ST",
            Category::Pwd => "PWD",
        }
    }
}

/// Remaining-capacity label shown on result cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    Available,
    Limited,
    Full,
}

/// Per-section thresholds for deriving a [`SeatStatus`] from a seat count.
/// Each generator section carries its own pair.
#[derive(Debug, Clone, Copy)]
pub struct SeatThresholds {
    pub available_above: u32,
    pub limited_above: u32,
}

impl SeatStatus {
    /// Pure derivation: strictly more than `available_above` seats left is
    /// `available`, strictly more than `limited_above` is `limited`,
    /// anything else is `full`.
    pub fn classify(available_seats: u32, thresholds: SeatThresholds) -> Self {
        if available_seats > thresholds.available_above {
            SeatStatus::Available
        } else if available_seats > thresholds.limited_above {
            SeatStatus::Limited
        } else {
            SeatStatus::Full
        }
    }
}

/// A directory entry: one institution × branch/course combination from the
/// synthetic dataset. Regenerated wholesale at startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct College {
    pub name: String,
    pub college_type: CollegeType,
    pub exam: Exam,
    pub state: String,
    /// Worst admitted rank for this seat; lower is more competitive.
    pub cutoff: u32,
    /// Numeric annual fee in rupees, used by range filters.
    pub annual_fee: u32,
    /// Display form of `annual_fee`, Indian digit grouping.
    pub fees: String,
    pub total_seats: u32,
    pub available_seats: u32,
    pub seat_status: SeatStatus,
    pub scholarship: Option<String>,
    pub rating: f32,
    pub placement_rate: f32,
    pub average_package_lakh: f32,
}

/// One row of a published cutoff list: an institute's closing ranks for a
/// single reservation category, per exam. A missing exam field means the
/// institute does not admit through that exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CutoffRecord {
    pub institute: String,
    pub state: String,
    pub category: Category,
    pub cutoff_jee_main: Option<u32>,
    pub cutoff_jee_advanced: Option<u32>,
    pub cutoff_neet: Option<u32>,
    pub annual_fee: Option<u32>,
}

/// Formats rupees with Indian digit grouping: the last three digits, then
/// pairs (`250000` → `"₹2,50,000"`).
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (lead, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = lead;
    }
    groups.push(rest);
    groups.reverse();
    format!("₹{},{}", groups.join(","), tail)
}
