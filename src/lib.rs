mod config;
pub use config::DEFAULT_CANDIDATE_RANKER_CONFIG;
pub mod constants;
pub use constants::DEFAULT_SEARCH_LIMIT;
pub mod handlers;
pub mod models;
pub use models::{
    ApiResponse, Candidate, CandidateRanker, CandidateRankerConfig, CandidateTableLoader,
    ChartLineStatus, ChartLineStore, ChartLines, Error, MarketAnalysis, MarketAnalysisStore,
    MarketAnalysisUpdate, NewReview, Review, ReviewKind, ReviewStore, WatchlistItem,
    WatchlistOrder, WatchlistStore, WatchlistUpdate,
};
pub mod types;
mod utils;
pub use types::{CandidateTable, MatchScore, Reviews, StockCode, StockName, WatchlistItems};

use constants::MISSING_KEYWORD_MESSAGE;
use log::{error, info};

/// Returns the best `limit` matches for `keyword`, using the default weights.
pub fn rank_candidates(table: &[Candidate], keyword: &str, limit: usize) -> Vec<Candidate> {
    rank_candidates_with_custom_config(DEFAULT_CANDIDATE_RANKER_CONFIG, table, keyword, limit)
}

pub fn rank_candidates_with_custom_config(
    candidate_ranker_config: &CandidateRankerConfig,
    table: &[Candidate],
    keyword: &str,
    limit: usize,
) -> Vec<Candidate> {
    CandidateRanker::new(candidate_ranker_config).rank(table, keyword, limit)
}

/// Handles a raw search request: trims the keyword and wraps the ranked
/// matches in an `ApiResponse`. A blank keyword is rejected with status 400.
pub fn search_stocks(
    table: &[Candidate],
    raw_keyword: &str,
    limit: usize,
) -> ApiResponse<Vec<Candidate>> {
    let keyword = raw_keyword.trim();

    if keyword.is_empty() {
        return ApiResponse::failure(400, MISSING_KEYWORD_MESSAGE);
    }

    let results = rank_candidates(table, keyword, limit);
    info!("Search for {:?} returned {} results", keyword, results.len());

    let count = results.len();
    ApiResponse::ok(results).with_count(count)
}

/// Same as `search_stocks`, but obtains the table from `load_table` first. A
/// failed load is reported with status 500.
pub fn search_stocks_from_loader<F>(
    load_table: F,
    raw_keyword: &str,
    limit: usize,
) -> ApiResponse<Vec<Candidate>>
where
    F: FnOnce() -> Result<CandidateTable, Error>,
{
    if raw_keyword.trim().is_empty() {
        return ApiResponse::failure(400, MISSING_KEYWORD_MESSAGE);
    }

    match load_table() {
        Ok(table) => search_stocks(&table, raw_keyword, limit),
        Err(err) => {
            error!("Failed to load candidate table: {}", err);
            ApiResponse::failure(500, err.to_string())
        }
    }
}

/// Converts a signed, caller-supplied limit into a ranker limit. Negative
/// values request no results; values past `usize::MAX` saturate.
pub fn clamp_limit(limit: i64) -> usize {
    if limit < 0 {
        return 0;
    }

    usize::try_from(limit).unwrap_or(usize::MAX)
}
