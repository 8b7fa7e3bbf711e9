use crate::keywords::{BREAKING, BREAKING_BY_AUTHOR};
use crate::model::{AuthorTally, CiFailureStats, Commit};

/// Counts commits that look like they broke the build.
///
/// The total and the per-author tally use different keyword sets; see
/// [`BREAKING_BY_AUTHOR`].
pub fn tally_ci_failures(commits: &[Commit]) -> CiFailureStats {
    let total_breaking = commits.iter().filter(|c| BREAKING.matches(&c.message)).count();

    let mut by_author = AuthorTally::new();
    for c in commits.iter().filter(|c| BREAKING_BY_AUTHOR.matches(&c.message)) {
        by_author.increment(&c.author);
    }

    CiFailureStats { total_breaking, by_author }
}
