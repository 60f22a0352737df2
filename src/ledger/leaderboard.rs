use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::core::LeaderboardEntry;

/// Most entries the leaderboard keeps
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Fastest completions, ascending by completion duration, one entry per user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary (possibly hand-edited) entries, restoring invariants
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    /// Insert or replace the entry for its user.
    ///
    /// Returns the 1-based rank of the entry, or `None` when it did not make
    /// the cut.
    pub fn upsert(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        let identity = entry.identity.clone();

        match self.entries.iter().position(|e| e.identity == identity) {
            Some(existing) => self.entries[existing] = entry,
            None => self.entries.push(entry),
        }

        self.entries.sort_by_key(|e| e.completion_duration_ms);
        self.entries.truncate(LEADERBOARD_CAPACITY);

        self.rank_of(&identity)
    }

    /// Up to `limit` entries (never more than the capacity), fastest first
    pub fn top(&self, limit: usize) -> &[LeaderboardEntry] {
        let end = limit.min(LEADERBOARD_CAPACITY).min(self.entries.len());
        &self.entries[..end]
    }

    pub fn entry_for(&self, identity: &str) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| e.identity == identity)
    }

    /// 1-based rank of a user
    pub fn rank_of(&self, identity: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.identity == identity)
            .map(|i| i + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sort, drop duplicate users (keeping their fastest entry) and cap the size
    pub fn normalize(&mut self) {
        self.entries.sort_by_key(|e| e.completion_duration_ms);

        let mut seen = HashSet::new();
        self.entries.retain(|e| seen.insert(e.identity.clone()));
        self.entries.truncate(LEADERBOARD_CAPACITY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::collections::BTreeSet;

    use crate::core::OutcomeCategory;

    fn entry(identity: &str, duration_ms: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            identity: identity.to_string(),
            display_name: identity.to_uppercase(),
            completed_outcomes: OutcomeCategory::ALL.into_iter().collect::<BTreeSet<_>>(),
            games_played: 6,
            completion_duration_ms: duration_ms,
            photo: None,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_upsert_sorts_ascending() {
        let mut board = Leaderboard::new();
        assert_eq!(board.upsert(entry("slow", 5_000)), Some(1));
        assert_eq!(board.upsert(entry("fast", 1_000)), Some(1));
        assert_eq!(board.upsert(entry("mid", 3_000)), Some(2));

        let order: Vec<&str> = board.iter().map(|e| e.identity.as_str()).collect();
        assert_eq!(order, vec!["fast", "mid", "slow"]);
    }

    #[test]
    fn test_upsert_replaces_existing_user() {
        let mut board = Leaderboard::new();
        board.upsert(entry("alice", 1_000));
        board.upsert(entry("bob", 2_000));
        board.upsert(entry("alice", 9_000));

        assert_eq!(board.len(), 2);
        assert_eq!(board.entry_for("alice").unwrap().completion_duration_ms, 9_000);
        assert_eq!(board.rank_of("alice"), Some(2));
    }

    #[test]
    fn test_capacity_keeps_fastest() {
        let mut board = Leaderboard::new();
        for i in 0..15 {
            board.upsert(entry(&format!("user{}", i), (15 - i) * 1_000));
        }

        assert_eq!(board.len(), LEADERBOARD_CAPACITY);
        assert_eq!(board.top(100).len(), LEADERBOARD_CAPACITY);
        assert_eq!(board.top(3)[0].identity, "user14");
        assert!(board.entry_for("user0").is_none());

        // too slow to make the cut
        assert_eq!(board.upsert(entry("late", 60_000)), None);
        assert!(board.entry_for("late").is_none());
    }

    #[test]
    fn test_normalize_repairs_input() {
        let board = Leaderboard::from_entries(vec![
            entry("b", 300),
            entry("a", 200),
            entry("b", 100),
        ]);

        assert_eq!(board.len(), 2);
        assert_eq!(board.top(10)[0].identity, "b");
        assert_eq!(board.top(10)[0].completion_duration_ms, 100);
    }

    #[test]
    fn test_top_limits() {
        let mut board = Leaderboard::new();
        board.upsert(entry("a", 1));
        board.upsert(entry("b", 2));

        assert!(board.top(0).is_empty());
        assert_eq!(board.top(1).len(), 1);
        assert_eq!(board.top(10).len(), 2);
    }
}
