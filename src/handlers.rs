//! Request-level wrappers around the stores. Each returns the `ApiResponse`
//! a transport would send back, carrying the user-facing success message.

pub mod chart_lines;
pub mod market_analysis;
pub mod reviews;
pub mod watchlist;
