use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One line of `git log`, split into its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    pub hash: String,
    pub author: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub author: String,
    pub score: u32,
    pub reverts: u32,
    pub fixes: u32,
    pub changes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShameScores {
    pub leaderboard: Vec<LeaderboardEntry>,
    pub timestamp: DateTime<Utc>,
    pub total_commits: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CiFailureStats {
    pub total_breaking: usize,
    pub by_author: AuthorTally,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertStats {
    pub total_reverts: usize,
    pub by_author: AuthorTally,
    pub recent_reverts: Vec<Commit>,
}

/// Per-author counter that remembers the order authors were first seen.
///
/// Serializes as a JSON object (`{"alice": 2, "bob": 1}`) in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorTally {
    entries: Vec<(String, usize)>,
}

impl AuthorTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, author: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == author) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((author.to_string(), 1)),
        }
    }

    pub fn get(&self, author: &str) -> usize {
        self.entries
            .iter()
            .find(|(name, _)| name == author)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, count)| (name.as_str(), *count))
    }

    /// Entries by count, highest first; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Serialize for AuthorTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (author, count) in &self.entries {
            map.serialize_entry(author, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FameEntry {
    pub author: String,
    pub commits: u32,
    pub reverts: u32,
    /// Percentage of non-revert commits, one decimal place.
    pub quality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakOutput {
    pub author: String,
    pub streak: usize,
}
