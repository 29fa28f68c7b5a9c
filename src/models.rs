pub mod api_response;
pub use api_response::ApiResponse;

pub mod candidate;
pub use candidate::Candidate;

pub mod candidate_ranker;
pub use candidate_ranker::{CandidateRanker, CandidateRankerConfig};

pub mod candidate_table_loader;
pub use candidate_table_loader::CandidateTableLoader;

pub mod chart_line_store;
pub use chart_line_store::{ChartLineStatus, ChartLineStore, ChartLines};

pub mod error;
pub use error::Error;

pub mod market_analysis_store;
pub use market_analysis_store::{MarketAnalysis, MarketAnalysisStore, MarketAnalysisUpdate};

pub mod review_store;
pub use review_store::{NewReview, Review, ReviewKind, ReviewStore};

pub mod watchlist_store;
pub use watchlist_store::{WatchlistItem, WatchlistOrder, WatchlistStore, WatchlistUpdate};
