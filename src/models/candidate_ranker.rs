use crate::models::Candidate;
use crate::types::{MatchScore, ScoredCandidate};
use crate::utils::find_char_position;
use log::debug;

pub struct CandidateRankerConfig {
    pub code_match_weight: usize,
    pub name_match_weight: usize,
}

/// Scores (code, name) candidates against a keyword and returns the best matches.
///
/// A match contributes `(length - first_position) * weight` for each field it
/// occurs in, so earlier matches in shorter strings rank higher and code
/// matches outweigh name matches under the default weights.
pub struct CandidateRanker<'a> {
    config: &'a CandidateRankerConfig,
}

impl<'a> CandidateRanker<'a> {
    pub fn new(config: &'a CandidateRankerConfig) -> Self {
        CandidateRanker { config }
    }

    /// Returns at most `limit` candidates ordered by descending score.
    ///
    /// Equal scores keep their order from `table`. An empty keyword, an empty
    /// table or a zero limit yields an empty result.
    pub fn rank(&self, table: &[Candidate], keyword: &str, limit: usize) -> Vec<Candidate> {
        if keyword.is_empty() || table.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<ScoredCandidate> = table
            .iter()
            .map(|candidate| (candidate, self.score(candidate, keyword)))
            .filter(|(_, score)| *score > 0)
            .collect();

        debug!(
            "Keyword {:?} matched {} of {} candidates",
            keyword,
            scored.len(),
            table.len()
        );

        // `sort_by` is stable; ties stay in table order.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        scored
            .into_iter()
            .take(limit)
            .map(|(candidate, _)| candidate.clone())
            .collect()
    }

    /// Match score of a single candidate. Zero when the keyword occurs in neither field.
    pub fn score(&self, candidate: &Candidate, keyword: &str) -> MatchScore {
        if keyword.is_empty() {
            return 0;
        }

        let code_score =
            Self::field_score(&candidate.code, keyword) * self.config.code_match_weight;

        let name_score = candidate
            .name
            .as_deref()
            .map(|name| Self::field_score(name, keyword))
            .unwrap_or(0)
            * self.config.name_match_weight;

        code_score + name_score
    }

    fn field_score(field: &str, keyword: &str) -> MatchScore {
        match find_char_position(field, keyword) {
            Some(position) => field.chars().count() - position,
            None => 0,
        }
    }
}
