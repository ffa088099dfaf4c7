//! Golden file integration tests.
//!
//! Verifies the engine against known prefixes of e from
//! tests/testdata/e_golden.json, for one worker and for several.

use serde::Deserialize;

use ecalc_core::compute_e;

#[derive(Deserialize)]
struct GoldenData {
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    digits: u32,
    e: String,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/e_golden.json")
        .expect("Failed to read golden file");
    serde_json::from_str(&data).expect("Failed to parse golden file")
}

#[test]
fn golden_single_worker() {
    let golden = load_golden();
    for entry in &golden.values {
        let result = compute_e(entry.digits, 1).unwrap();
        assert_eq!(result, entry.e, "digits={} single worker", entry.digits);
    }
}

#[test]
fn golden_three_workers() {
    let golden = load_golden();
    for entry in &golden.values {
        let result = compute_e(entry.digits, 3).unwrap();
        assert_eq!(result, entry.e, "digits={} three workers", entry.digits);
    }
}

#[test]
fn golden_entries_are_well_formed() {
    let golden = load_golden();
    assert!(!golden.values.is_empty());
    for entry in &golden.values {
        assert!(entry.e.starts_with('2'), "digits={}", entry.digits);
        if entry.digits > 0 {
            let fraction = entry.e.split('.').nth(1).unwrap();
            assert_eq!(fraction.len(), entry.digits as usize);
        }
    }
}
