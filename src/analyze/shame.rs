use crate::keywords::{CI_FAILURE_LIKE, REVERT_LIKE};
use crate::model::{Commit, LeaderboardEntry, ShameScores};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

pub const REVERT_POINTS: u32 = 10;
pub const CI_FAILURE_POINTS: u32 = 5;

#[derive(Default)]
struct AuthorStats {
    score: u32,
    reverts: u32,
    fixes: u32,
    changes: u32,
}

/// Builds the shame leaderboard.
///
/// Only authors with at least one revert-like or CI-failure-like commit get a
/// row; everyone still counts towards `total_commits`. Equal scores keep the
/// order in which authors first scored, revert-like commits first.
pub fn score_shame(commits: &[Commit], timestamp: DateTime<Utc>) -> ShameScores {
    let mut stats: HashMap<&str, AuthorStats> = HashMap::new();
    let mut scored: Vec<&str> = Vec::new();

    for c in commits.iter().filter(|c| REVERT_LIKE.matches(&c.message)) {
        accrue(&mut stats, &mut scored, &c.author, REVERT_POINTS).reverts += 1;
    }
    for c in commits.iter().filter(|c| CI_FAILURE_LIKE.matches(&c.message)) {
        accrue(&mut stats, &mut scored, &c.author, CI_FAILURE_POINTS).fixes += 1;
    }

    for c in commits {
        stats.entry(c.author.as_str()).or_default().changes += 1;
    }

    let mut rows: Vec<(&str, &AuthorStats)> = scored
        .iter()
        .filter_map(|author| stats.get(author).map(|s| (*author, s)))
        .collect();
    rows.sort_by(|a, b| b.1.score.cmp(&a.1.score));

    let leaderboard = rows
        .into_iter()
        .enumerate()
        .map(|(i, (author, s))| LeaderboardEntry {
            rank: i as u32 + 1,
            author: author.to_string(),
            score: s.score,
            reverts: s.reverts,
            fixes: s.fixes,
            changes: s.changes,
        })
        .collect();

    ShameScores {
        leaderboard,
        timestamp,
        total_commits: commits.len(),
    }
}

fn accrue<'a, 'm>(
    stats: &'m mut HashMap<&'a str, AuthorStats>,
    scored: &mut Vec<&'a str>,
    author: &'a str,
    points: u32,
) -> &'m mut AuthorStats {
    if !scored.contains(&author) {
        scored.push(author);
    }
    let entry = stats.entry(author).or_default();
    entry.score += points;
    entry
}
