use crate::keywords::STREAK_BREAKER;
use crate::model::Commit;

/// Number of `author`'s newest commits before their first revert or rollback.
///
/// Author names match exactly. An unknown author has a streak of zero.
pub fn count_streak(commits: &[Commit], author: &str) -> usize {
    commits
        .iter()
        .filter(|c| c.author == author)
        .take_while(|c| !STREAK_BREAKER.matches(&c.message))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::parse_commits;

    #[test]
    fn stops_at_first_revert_or_rollback() {
        let commits = parse_commits(
            "a|Alice|a@x|add x\n\
             b|Bob|b@x|Revert y\n\
             c|Alice|a@x|add z\n\
             d|Alice|a@x|Rollback deploy\n\
             e|Alice|a@x|add w",
        );
        assert_eq!(count_streak(&commits, "Alice"), 2);
        assert_eq!(count_streak(&commits, "Bob"), 0);
    }

    #[test]
    fn newest_rollback_gives_zero() {
        let commits = parse_commits("a|Alice|a@x|rollback\nb|Alice|a@x|add x");
        assert_eq!(count_streak(&commits, "Alice"), 0);
    }

    #[test]
    fn clean_history_counts_every_commit() {
        let commits = parse_commits("a|Alice|a@x|one\nb|Alice|a@x|two\nc|Alice|a@x|three");
        assert_eq!(count_streak(&commits, "Alice"), 3);
    }

    #[test]
    fn unknown_or_differently_cased_author_is_zero() {
        let commits = parse_commits("a|Alice|a@x|one");
        assert_eq!(count_streak(&commits, "Nobody"), 0);
        assert_eq!(count_streak(&commits, "alice"), 0);
    }
}
