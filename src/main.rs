use clap::{Parser, Subcommand};
use log::{error, info};
use serde::Serialize;
use std::path::PathBuf;
use stock_search::constants::{
    DEFAULT_DATA_DIRECTORY, DEFAULT_LISTING_FILE_PATH, WATCHLIST_FILE_NAME,
};
use stock_search::handlers::{chart_lines, market_analysis, reviews, watchlist};
use stock_search::{
    clamp_limit, search_stocks_from_loader, ApiResponse, CandidateTableLoader, ChartLineStore,
    MarketAnalysisStore, NewReview, ReviewStore, WatchlistStore, WatchlistUpdate,
    DEFAULT_SEARCH_LIMIT,
};

#[derive(Parser)]
#[command(
    name = "stock-search-cli",
    about = "Search stock codes and names, manage the watchlist, reviews and notes"
)]
struct Cli {
    /// Directory holding the watchlist, review files and per-stock folders
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rank listing entries against a keyword
    Search {
        keyword: String,

        #[arg(short, long, default_value_t = DEFAULT_SEARCH_LIMIT as i64, allow_negative_numbers = true)]
        limit: i64,

        /// Listing CSV (`.gz` files are decompressed)
        #[arg(long)]
        listing: Option<PathBuf>,
    },
    Watchlist {
        #[command(subcommand)]
        action: WatchlistAction,
    },
    /// Stock reviews of a given type, or position reviews when no type is given
    Review {
        #[arg(long = "type")]
        review_type: Option<String>,

        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Daily market analysis notes per stock
    Analysis {
        #[command(subcommand)]
        action: AnalysisAction,
    },
    /// Chart lines per stock and period
    Lines {
        #[command(subcommand)]
        action: LinesAction,
    },
}

#[derive(Subcommand)]
enum WatchlistAction {
    List,
    Get {
        code: String,
    },
    Contains {
        code: String,
    },
    Add {
        code: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long)]
        remark: Option<String>,
    },
    /// Move the given codes to the front, in order
    Reorder {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    Remove {
        code: String,
    },
}

#[derive(Subcommand)]
enum ReviewAction {
    List {
        #[arg(long)]
        keyword: Option<String>,
    },
    Add {
        code: String,
        title: String,
        #[arg(long, default_value = "")]
        date: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Get {
        id: String,
    },
    Remove {
        id: String,
    },
}

#[derive(Subcommand)]
enum AnalysisAction {
    /// Latest note of each comma-separated code
    Latest { codes: String },
    /// Write today's note, replacing one already written today
    Add { code: String, analysis: String },
}

#[derive(Subcommand)]
enum LinesAction {
    Get {
        code: String,
        period: String,
    },
    Add {
        code: String,
        period: String,
        /// JSON array of line objects, each with an `id`
        lines: String,
        #[arg(long, default_value_t = 0)]
        width: i64,
        #[arg(long, default_value_t = 0)]
        height: i64,
    },
    Remove {
        code: String,
        period: String,
        /// Line id; parsed as JSON when possible, otherwise taken as a string
        id: String,
    },
}

fn main() {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| DEFAULT_DATA_DIRECTORY.clone());

    let succeeded = match cli.command {
        Command::Search {
            keyword,
            limit,
            listing,
        } => {
            let listing = listing.unwrap_or_else(|| DEFAULT_LISTING_FILE_PATH.clone());
            info!("Searching {:?} for {:?}", listing, keyword);

            let response = search_stocks_from_loader(
                || CandidateTableLoader::read_candidate_table(&listing),
                &keyword,
                clamp_limit(limit),
            );
            print_response(&response)
        }
        Command::Watchlist { action } => {
            let store = WatchlistStore::new(data_dir.join(WATCHLIST_FILE_NAME));
            run_watchlist_action(&store, action)
        }
        Command::Review {
            review_type,
            action,
        } => match review_type {
            Some(review_type) => match ReviewStore::stock_reviews(&data_dir, &review_type) {
                Ok(store) => run_review_action(&store, action),
                Err(err) => print_response(&ApiResponse::<()>::from(err)),
            },
            None => run_review_action(&ReviewStore::position_reviews(&data_dir), action),
        },
        Command::Analysis { action } => {
            let store = MarketAnalysisStore::new(&data_dir);
            match action {
                AnalysisAction::Latest { codes } => {
                    print_response(&market_analysis::latest(&store, &codes))
                }
                AnalysisAction::Add { code, analysis } => {
                    print_response(&market_analysis::upsert(&store, &code, &analysis))
                }
            }
        }
        Command::Lines { action } => run_lines_action(&ChartLineStore::new(&data_dir), action),
    };

    if !succeeded {
        std::process::exit(1);
    }
}

fn run_watchlist_action(store: &WatchlistStore, action: WatchlistAction) -> bool {
    match action {
        WatchlistAction::List => print_response(&watchlist::list(store)),
        WatchlistAction::Get { code } => print_response(&watchlist::get(store, &code)),
        WatchlistAction::Contains { code } => print_response(&watchlist::contains(store, &code)),
        WatchlistAction::Add {
            code,
            name,
            color,
            remark,
        } => {
            let update = WatchlistUpdate {
                name,
                color,
                remark,
            };
            print_response(&watchlist::upsert(store, &code, &update))
        }
        WatchlistAction::Reorder { codes } => print_response(&watchlist::reorder(store, &codes)),
        WatchlistAction::Remove { code } => print_response(&watchlist::remove(store, &code)),
    }
}

fn run_review_action(store: &ReviewStore, action: ReviewAction) -> bool {
    match action {
        ReviewAction::List { keyword } => {
            print_response(&reviews::list(store, keyword.as_deref()))
        }
        ReviewAction::Add {
            code,
            title,
            date,
            description,
        } => {
            let new_review = NewReview {
                code,
                title,
                date,
                description,
            };
            print_response(&reviews::add(store, &new_review))
        }
        ReviewAction::Get { id } => print_response(&reviews::get(store, &id)),
        ReviewAction::Remove { id } => print_response(&reviews::remove(store, &id)),
    }
}

fn run_lines_action(store: &ChartLineStore, action: LinesAction) -> bool {
    match action {
        LinesAction::Get { code, period } => {
            print_response(&chart_lines::query(store, &code, &period))
        }
        LinesAction::Add {
            code,
            period,
            lines,
            width,
            height,
        } => match serde_json::from_str(&lines) {
            Ok(lines) => print_response(&chart_lines::add(
                store, &code, &period, &lines, width, height,
            )),
            Err(e) => print_response(&ApiResponse::<()>::failure(
                400,
                format!("lines is not valid JSON: {}", e),
            )),
        },
        LinesAction::Remove { code, period, id } => {
            let line_id =
                serde_json::from_str(&id).unwrap_or_else(|_| serde_json::Value::String(id));
            print_response(&chart_lines::remove(store, &code, &period, &line_id))
        }
    }
}

fn print_response<T: Serialize>(response: &ApiResponse<T>) -> bool {
    match response.to_json() {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            return false;
        }
    }

    if !response.is_success() {
        error!("Request failed with status {}", response.status);
    }

    response.is_success()
}
