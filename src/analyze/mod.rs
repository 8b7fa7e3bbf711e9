pub mod analyzer;
pub mod ci;
pub mod fame;
pub mod parse;
pub mod reverts;
pub mod shame;
pub mod streak;

pub use analyzer::HistoryAnalyzer;
pub use ci::tally_ci_failures;
pub use fame::{rank_fame, DEFAULT_FAME_LIMIT, MIN_FAME_COMMITS};
pub use parse::parse_commits;
pub use reverts::{tally_reverts, RECENT_REVERTS};
pub use shame::{score_shame, CI_FAILURE_POINTS, REVERT_POINTS};
pub use streak::count_streak;
