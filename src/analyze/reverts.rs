use crate::keywords::REVERT;
use crate::model::{AuthorTally, Commit, RevertStats};

/// How many of the newest reverts are listed individually.
pub const RECENT_REVERTS: usize = 5;

pub fn tally_reverts(commits: &[Commit]) -> RevertStats {
    let reverts: Vec<&Commit> = commits.iter().filter(|c| REVERT.matches(&c.message)).collect();

    let mut by_author = AuthorTally::new();
    for c in &reverts {
        by_author.increment(&c.author);
    }

    RevertStats {
        total_reverts: reverts.len(),
        by_author,
        recent_reverts: reverts.into_iter().take(RECENT_REVERTS).cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::parse_commits;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_reverts_by_author() {
        let stats = tally_reverts(&parse_commits(
            "a|Alice|a@x|Revert \"add cache\"\n\
             b|Bob|b@x|fix: typo in docs\n\
             c|Bob|b@x|revert flaky test",
        ));
        assert_eq!(stats.total_reverts, 2);
        assert_eq!(stats.by_author.get("Alice"), 1);
        assert_eq!(stats.by_author.get("Bob"), 1);
        assert_eq!(stats.recent_reverts[0].hash, "a");
        assert_eq!(stats.recent_reverts[1].hash, "c");
    }

    #[test]
    fn recent_reverts_are_the_newest_five() {
        let log: String = (0..8).map(|i| format!("h{i}|Alice|a@x|Revert change {i}\n")).collect();
        let stats = tally_reverts(&parse_commits(&log));
        assert_eq!(stats.total_reverts, 8);
        let hashes: Vec<_> = stats.recent_reverts.iter().map(|c| c.hash.as_str()).collect();
        assert_eq!(hashes, vec!["h0", "h1", "h2", "h3", "h4"]);
    }
}
