//! Cutoff snapshot loading — probes a fixed list of candidate paths for a
//! JSON array of cutoff rows. Any failure (missing file, unreadable file,
//! malformed JSON) degrades to an empty list: prediction endpoints then
//! return empty results rather than errors.

use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::models::college::CutoffRecord;

/// Probed in order; the first file that reads and parses wins.
const SNAPSHOT_CANDIDATES: &[&str] = &[
    "college_data.json",
    "data/college_data.json",
    "public/college_data.json",
    "../college_data.json",
];

/// Loads the cutoff snapshot. `override_path`, when set, is the only path
/// tried.
pub fn load_snapshot(override_path: Option<&str>) -> Vec<CutoffRecord> {
    let candidates: Vec<&str> = match override_path {
        Some(path) => vec![path],
        None => SNAPSHOT_CANDIDATES.to_vec(),
    };

    for candidate in candidates {
        if !Path::new(candidate).is_file() {
            debug!("No cutoff snapshot at {candidate}");
            continue;
        }
        let raw = match fs::read_to_string(candidate) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Failed to read cutoff snapshot {candidate}: {e}");
                continue;
            }
        };
        match parse_records(&raw) {
            Ok(records) => {
                info!("Loaded {} cutoff records from {candidate}", records.len());
                return records;
            }
            Err(e) => {
                warn!("Malformed cutoff snapshot {candidate}: {e}");
                continue;
            }
        }
    }

    warn!("No usable cutoff snapshot found; prediction endpoints will return empty results");
    Vec::new()
}

fn parse_records(raw: &str) -> Result<Vec<CutoffRecord>, serde_json::Error> {
    serde_json::from_str(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_snapshot() {
        let raw = r#"[
            {
                "institute": "IIT Bombay",
                "state": "Maharashtra",
                "category": "General",
                "cutoff_jee_main": null,
                "cutoff_jee_advanced": 66,
                "cutoff_neet": null,
                "annual_fee": 220000
            },
            {
                "institute": "AIIMS New Delhi",
                "state": "Delhi",
                "category": "SC",
                "cutoff_jee_main": null,
                "cutoff_jee_advanced": null,
                "cutoff_neet": 320,
                "annual_fee": 6000
            }
        ]"#;
        let records = parse_records(raw).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].cutoff_jee_advanced, Some(66));
        assert_eq!(records[1].cutoff_neet, Some(320));
    }

    #[test]
    fn test_malformed_snapshot_is_an_error() {
        assert!(parse_records("{\"not\": \"an array\"}").is_err());
        assert!(parse_records("[{\"institute\": 7}]").is_err());
    }

    #[test]
    fn test_missing_override_path_yields_empty() {
        let records = load_snapshot(Some("/nonexistent/cutoffs.json"));
        assert!(records.is_empty());
    }
}
