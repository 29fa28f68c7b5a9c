// Types listed here are either shared across multiple files and/or exposed via the library.

use crate::models::{Candidate, Review, WatchlistItem};

/// Represents a market code (e.g. `600000` or `sh600000`) as an owned `String`.
pub type StockCode = String;

/// Represents the human-readable name of a stock as an owned `String`.
pub type StockName = String;

/// The ordered set of candidates searched per query. Insertion order is the
/// tie-break order for equal scores.
pub type CandidateTable = Vec<Candidate>;

/// Heuristic match strength of a single candidate. Zero means no match.
pub type MatchScore = usize;

/// A borrowed candidate paired with its match score.
pub type ScoredCandidate<'a> = (&'a Candidate, MatchScore);

/// All rows of the watchlist file, in file order.
pub type WatchlistItems = Vec<WatchlistItem>;

/// Rows of one review file, in file order.
pub type Reviews = Vec<Review>;
