use super::{count_streak, parse_commits, rank_fame, score_shame, tally_ci_failures, tally_reverts};
use crate::error::{Result, ShameError};
use crate::git::LogSource;
use crate::model::{CiFailureStats, Commit, FameEntry, LeaderboardEntry, RevertStats, ShameScores};
use chrono::Utc;
use tracing::debug;

/// Leaderboards over the recent history of one repository.
///
/// Every operation re-reads and re-parses the history from its source; nothing
/// is cached between calls.
pub struct HistoryAnalyzer<S> {
    source: S,
}

impl<S: LogSource> HistoryAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn commits(&self) -> Result<Vec<Commit>> {
        let text = self.source.fetch()?.into_text();
        let commits = parse_commits(&text);
        debug!(count = commits.len(), "parsed commits");
        Ok(commits)
    }

    /// Shame leaderboard. Any failure surfaces as [`ShameError::Analyze`].
    pub fn shame_scores(&self) -> Result<ShameScores> {
        let commits = self.commits().map_err(ShameError::analyze)?;
        Ok(score_shame(&commits, Utc::now()))
    }

    /// The `limit` worst rows of the shame leaderboard.
    pub fn hall_of_shame(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let mut scores = self.shame_scores()?;
        scores.leaderboard.truncate(limit);
        Ok(scores.leaderboard)
    }

    pub fn ci_failure_stats(&self) -> Result<CiFailureStats> {
        Ok(tally_ci_failures(&self.commits()?))
    }

    pub fn revert_stats(&self) -> Result<RevertStats> {
        Ok(tally_reverts(&self.commits()?))
    }

    pub fn streak(&self, author: &str) -> Result<usize> {
        Ok(count_streak(&self.commits()?, author))
    }

    pub fn hall_of_fame(&self, limit: usize) -> Result<Vec<FameEntry>> {
        Ok(rank_fame(&self.commits()?, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::DEFAULT_FAME_LIMIT;
    use crate::git::{LogFile, LogOutput, TextLog};
    use pretty_assertions::assert_eq;

    struct Unavailable;

    impl LogSource for Unavailable {
        fn fetch(&self) -> Result<LogOutput> {
            Ok(LogOutput::Unavailable)
        }
    }

    fn analyzer(text: &str) -> HistoryAnalyzer<TextLog> {
        HistoryAnalyzer::new(TextLog::new(text))
    }

    const ALICE_REVERTED: &str = "abc123|Alice|a@x.com|Revert \"bad change\"\n\
        abc124|Alice|a@x.com|add parser\n\
        abc125|Alice|a@x.com|add lexer\n\
        abc126|Alice|a@x.com|update readme\n\
        abc127|Alice|a@x.com|initial import\n";

    #[test]
    fn newest_revert_round_trip() {
        let a = analyzer(ALICE_REVERTED);

        let scores = a.shame_scores().unwrap();
        assert_eq!(scores.total_commits, 5);
        let alice = &scores.leaderboard[0];
        assert_eq!((alice.reverts, alice.changes), (1, 5));

        assert_eq!(a.revert_stats().unwrap().by_author.get("Alice"), 1);
        assert_eq!(a.streak("Alice").unwrap(), 0);

        let fame = a.hall_of_fame(DEFAULT_FAME_LIMIT).unwrap();
        assert_eq!(fame[0].quality, "80.0");
    }

    #[test]
    fn total_commits_counts_non_blank_lines() {
        let text = "\na|A|a@x|one\n   \nb|B|b@x|two\nc|C|c@x|three\n\n";
        let expected = text.lines().filter(|l| !l.trim().is_empty()).count();
        assert_eq!(analyzer(text).shame_scores().unwrap().total_commits, expected);
    }

    #[test]
    fn empty_history_yields_empty_results() {
        let a = analyzer("");
        let scores = a.shame_scores().unwrap();
        assert!(scores.leaderboard.is_empty());
        assert_eq!(scores.total_commits, 0);

        let ci = a.ci_failure_stats().unwrap();
        assert_eq!(ci.total_breaking, 0);
        assert!(ci.by_author.is_empty());

        let reverts = a.revert_stats().unwrap();
        assert_eq!(reverts.total_reverts, 0);
        assert!(reverts.recent_reverts.is_empty());

        assert_eq!(a.streak("anyone").unwrap(), 0);
        assert!(a.hall_of_fame(DEFAULT_FAME_LIMIT).unwrap().is_empty());
        assert!(a.hall_of_shame(10).unwrap().is_empty());
    }

    #[test]
    fn unavailable_history_degrades_to_no_commits() {
        let a = HistoryAnalyzer::new(Unavailable);
        assert_eq!(a.shame_scores().unwrap().total_commits, 0);
        assert_eq!(a.revert_stats().unwrap().total_reverts, 0);
    }

    #[test]
    fn hall_of_shame_truncates_leaderboard() {
        let a = analyzer("a|A|a@x|Revert 1\nb|B|b@x|Revert 2\nc|C|c@x|Revert 3");
        let rows = a.hall_of_shame(2).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].rank, 2);
    }

    #[test]
    fn only_shame_scores_wraps_source_errors() {
        let a = HistoryAnalyzer::new(LogFile::new("/no/such/history.log"));

        let err = a.shame_scores().unwrap_err();
        assert!(matches!(err, ShameError::Analyze(_)));
        assert!(err.to_string().starts_with("Failed to analyze git history: IO error"));

        assert!(matches!(a.revert_stats().unwrap_err(), ShameError::Io(_)));
        assert!(matches!(a.streak("Alice").unwrap_err(), ShameError::Io(_)));
    }

    #[test]
    fn every_call_rereads_the_source() {
        use std::cell::Cell;

        struct Counting(Cell<usize>);
        impl LogSource for Counting {
            fn fetch(&self) -> Result<LogOutput> {
                self.0.set(self.0.get() + 1);
                Ok(LogOutput::Text(String::new()))
            }
        }

        let a = HistoryAnalyzer::new(Counting(Cell::new(0)));
        a.shame_scores().unwrap();
        a.ci_failure_stats().unwrap();
        a.streak("x").unwrap();
        assert_eq!(a.source().0.get(), 3);
    }
}
