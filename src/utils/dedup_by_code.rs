use crate::models::Candidate;
use log::debug;
use std::collections::HashSet;

/// Drops candidates whose code was already seen, keeping the first occurrence
/// and the original order. Empty codes are never treated as duplicates.
pub fn dedup_by_code(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen = HashSet::new();

    candidates
        .into_iter()
        .filter(|candidate| {
            if candidate.code.is_empty() || seen.insert(candidate.code.clone()) {
                true
            } else {
                debug!("Dropping duplicate code: {}", candidate.code);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_occurrence_wins() {
        let candidates = vec![
            Candidate::new("600000", "浦发银行"),
            Candidate::new("600036", "招商银行"),
            Candidate::new("600000", "浦发"),
        ];

        assert_eq!(
            dedup_by_code(candidates),
            vec![
                Candidate::new("600000", "浦发银行"),
                Candidate::new("600036", "招商银行"),
            ]
        );
    }

    #[test]
    fn test_empty_codes_are_kept() {
        let candidates = vec![Candidate::new("", "甲"), Candidate::new("", "乙")];

        assert_eq!(dedup_by_code(candidates).len(), 2);
    }
}
