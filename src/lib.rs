//! Leaderboards of reverts, fixes and streaks built from recent git history.
//!
//! The history is read with `git log --pretty=format:%H|%an|%ae|%s --all -100`
//! and every report is derived from that text alone.

pub mod analyze;
pub mod cli;
pub mod error;
pub mod git;
pub mod keywords;
pub mod model;
pub mod output;

pub use analyze::HistoryAnalyzer;
pub use error::{Result, ShameError};
pub use git::{GitLog, LogFile, LogOutput, LogSource, TextLog};
