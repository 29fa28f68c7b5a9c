use std::path::PathBuf;
use std::sync::LazyLock;

/// Number of results returned when the caller does not ask for a specific limit.
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Watchlist codes are compared by this many trailing characters, so an
/// exchange-prefixed code (`sh600000`) and a bare one (`600000`) collide.
pub const CODE_SUFFIX_LEN: usize = 6;

pub const UTF8_BOM: char = '\u{feff}';

/// Header pairs tried in order when resolving the code and name columns of a listing.
pub const CANDIDATE_HEADER_ALIASES: &[(&str, &str)] =
    &[("代码", "名称"), ("symbol", "name"), ("code", "name")];

pub const WATCHLIST_HEADERS: [&str; 5] = ["code", "name", "color", "remark", "sort"];

pub const REVIEW_HEADERS: [&str; 5] = ["id", "title", "code", "date", "description"];

pub const MARKET_ANALYSIS_HEADERS: [&str; 2] = ["date", "analysis"];

pub const CHART_LINE_HEADERS: [&str; 5] = ["code", "period", "lines", "width", "height"];

pub const MARKET_ANALYSIS_DATE_FORMAT: &str = "%Y-%m-%d";

pub const WATCHLIST_FILE_NAME: &str = "selection.csv";

pub const POSITION_REVIEW_FILE_NAME: &str = "position_review.csv";

/// Stock reviews live in one file per review type: `stock_review_<type>.csv`.
pub const STOCK_REVIEW_FILE_PREFIX: &str = "stock_review_";

pub const MARKET_ANALYSIS_DIR_NAME: &str = "marketAnalysis";

pub const CHART_LINES_DIR_NAME: &str = "lines";

pub const MISSING_KEYWORD_MESSAGE: &str = "缺少查询关键词";

pub static DEFAULT_LISTING_FILE_PATH: LazyLock<PathBuf> =
    LazyLock::new(|| PathBuf::from("stock_codes_names.csv"));

pub static DEFAULT_DATA_DIRECTORY: LazyLock<PathBuf> = LazyLock::new(|| PathBuf::from("."));
