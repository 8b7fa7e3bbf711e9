use crate::keywords::REVERT;
use crate::model::{Commit, FameEntry};

/// Authors need this many commits to be ranked.
pub const MIN_FAME_COMMITS: u32 = 5;
pub const DEFAULT_FAME_LIMIT: usize = 10;

/// Ranks authors by the share of their commits that are not reverts.
///
/// Ties keep the order in which authors first appear in the log.
pub fn rank_fame(commits: &[Commit], limit: usize) -> Vec<FameEntry> {
    let mut stats: Vec<(&str, u32, u32)> = Vec::new();
    for c in commits {
        let idx = match stats.iter().position(|(author, _, _)| *author == c.author) {
            Some(idx) => idx,
            None => {
                stats.push((c.author.as_str(), 0, 0));
                stats.len() - 1
            }
        };
        stats[idx].1 += 1;
        if REVERT.matches(&c.message) {
            stats[idx].2 += 1;
        }
    }

    let mut ranked: Vec<(f64, FameEntry)> = stats
        .into_iter()
        .filter(|(_, commits, _)| *commits >= MIN_FAME_COMMITS)
        .map(|(author, commits, reverts)| {
            let quality = round_tenth((commits - reverts) as f64 / commits as f64 * 100.0);
            let entry = FameEntry {
                author: author.to_string(),
                commits,
                reverts,
                quality: format!("{quality:.1}"),
            };
            (quality, entry)
        })
        .collect();

    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    ranked.into_iter().take(limit).map(|(_, entry)| entry).collect()
}

/// Rounds half away from zero, so 6.25 becomes 6.3.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
