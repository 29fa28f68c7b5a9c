pub mod constants;

use csv::Reader;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::error::Error;
use std::io::Write;
use std::path::Path;
use stock_search::{Candidate, CandidateTable, WatchlistStore};
use tempfile::TempDir;

/// The three-row table used throughout the ranking examples.
pub fn sample_candidate_table() -> CandidateTable {
    vec![
        Candidate::new("600000", "浦发银行"),
        Candidate::new("600036", "招商银行"),
        Candidate::new("000001", "平安银行"),
    ]
}

/// Builds a table from `(code, name)` pairs, preserving order.
pub fn candidate_table(rows: &[(&str, &str)]) -> CandidateTable {
    rows.iter()
        .map(|(code, name)| Candidate::new(code, name))
        .collect()
}

pub fn codes(candidates: &[Candidate]) -> Vec<&str> {
    candidates
        .iter()
        .map(|candidate| candidate.code.as_str())
        .collect()
}

/// Reads a two-column listing without going through the crate's loader, so
/// loader tests have an independent reference.
pub fn load_candidates_from_file<P: AsRef<Path>>(
    file_path: P,
) -> Result<CandidateTable, Box<dyn Error>> {
    let raw = std::fs::read_to_string(file_path)?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(&raw);
    let mut reader = Reader::from_reader(raw.as_bytes());
    let mut candidates = CandidateTable::new();

    for record in reader.records() {
        let record = record?;
        if record.len() == 2 {
            candidates.push(Candidate::new(&record[0], &record[1]));
        } else {
            eprintln!("Skipping invalid row: {:?}", record);
        }
    }

    Ok(candidates)
}

pub fn gzip_bytes(data: &str) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data.as_bytes())
        .expect("Failed to compress test data");
    encoder.finish().expect("Failed to finalize compression")
}

/// A watchlist store backed by a file inside a fresh temporary directory. Keep
/// the returned `TempDir` alive for as long as the store is used.
pub fn temp_watchlist_store() -> (TempDir, WatchlistStore) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = WatchlistStore::new(dir.path().join("selection.csv"));
    (dir, store)
}

/// A fresh, empty data directory for the per-stock and review stores.
pub fn temp_data_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}
