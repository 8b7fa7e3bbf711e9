//! Commit-message classifiers.
//!
//! Each set is a list of lowercase substrings; a message matches when any of
//! them occurs in the lowercased message. Note that the substrings are not
//! word-bounded: `ci` matches "decide" and `fix` matches "prefix".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordSet {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

impl KeywordSet {
    pub const fn new(name: &'static str, keywords: &'static [&'static str]) -> Self {
        Self { name, keywords }
    }

    pub fn matches(&self, message: &str) -> bool {
        let lower = message.to_lowercase();
        self.keywords.iter().any(|k| lower.contains(k))
    }
}

/// Worth 10 shame points.
pub const REVERT_LIKE: KeywordSet = KeywordSet::new("revert-like", &["revert", "fix:", "hotfix"]);

/// Worth 5 shame points.
pub const CI_FAILURE_LIKE: KeywordSet =
    KeywordSet::new("ci-failure-like", &["ci", "fix", "emergency"]);

/// Counted in the CI breaking total.
pub const BREAKING: KeywordSet =
    KeywordSet::new("breaking", &["break", "emergency", "hotfix", "rollback"]);

/// Counted in the per-author CI breakdown.
///
/// Narrower than [`BREAKING`]: hotfix and rollback commits reach the total but
/// no author's tally, so the per-author counts need not sum to the total. This
/// mirrors the historical report output and is kept until the intended
/// behavior is settled.
pub const BREAKING_BY_AUTHOR: KeywordSet =
    KeywordSet::new("breaking-by-author", &["break", "emergency"]);

pub const REVERT: KeywordSet = KeywordSet::new("revert", &["revert"]);

/// Ends a streak.
pub const STREAK_BREAKER: KeywordSet = KeywordSet::new("streak-breaker", &["revert", "rollback"]);
