//! Progress ledger: per-user outcome tracking and the completion leaderboard.
//!
//! [`apply_game`] holds the state transition; [`ProgressLedger`] loads the
//! affected slots, applies it and writes the result back.

pub mod leaderboard;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::clock::Clock;
use crate::core::{ImageRef, LeaderboardEntry, ScoreResult, UserProgress};
use crate::error::Result;
use crate::store::{self, KvStore, Slot};

pub use leaderboard::{Leaderboard, LEADERBOARD_CAPACITY};

/// Identity key → progress, as persisted in the `userProgress` slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProgressBook {
    users: HashMap<String, UserProgress>,
}

impl ProgressBook {
    pub fn get(&self, identity: &str) -> Option<&UserProgress> {
        self.users.get(identity)
    }

    pub fn get_mut(&mut self, identity: &str) -> Option<&mut UserProgress> {
        self.users.get_mut(identity)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Who a game is recorded for
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    pub identity: &'a str,
    pub display_name: &'a str,
}

/// Outcome of recording one game
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub progress: UserProgress,

    /// Present when the user has every outcome and made the leaderboard
    pub entry: Option<LeaderboardEntry>,

    /// 1-based leaderboard position
    pub rank: Option<usize>,

    /// Whether this game unlocked an outcome the user did not have yet
    pub new_outcome: bool,
}

/// Apply one scored game to in-memory ledger state.
///
/// Returns the record and whether the leaderboard was touched.
pub fn apply_game(
    book: &mut ProgressBook,
    board: &mut Leaderboard,
    player: Player<'_>,
    result: &ScoreResult,
    now: chrono::DateTime<chrono::Utc>,
) -> (GameRecord, bool) {
    let progress = book
        .users
        .entry(player.identity.to_string())
        .or_insert_with(|| {
            tracing::debug!("Starting progress for {}", player.identity);
            UserProgress::new(player.identity, player.display_name, now, result.photo1.clone())
        });

    progress.display_name = player.display_name.to_string();
    let new_outcome = progress.record(result.outcome, now);

    let mut touched = false;
    let mut rank = None;
    if progress.is_complete() {
        let entry = LeaderboardEntry::from_progress(progress, now);
        let completion_time = entry.completion_time();
        rank = board.upsert(entry);
        touched = true;

        match rank {
            Some(r) => tracing::info!(
                "🏆 {} completed all outcomes in {} (rank #{})",
                player.display_name,
                completion_time,
                r
            ),
            None => tracing::info!(
                "{} completed all outcomes but missed the top {}",
                player.display_name,
                LEADERBOARD_CAPACITY
            ),
        }
    }

    let record = GameRecord {
        progress: progress.clone(),
        entry: rank.and_then(|_| board.entry_for(player.identity).cloned()),
        rank,
        new_outcome,
    };

    (record, touched)
}

/// Persistent progress ledger over a [`KvStore`]
pub struct ProgressLedger {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    write_lock: Mutex<()>,
}

impl ProgressLedger {
    pub fn new(store: Arc<dyn KvStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            write_lock: Mutex::new(()),
        }
    }

    /// Record a scored game for `player` and persist the updated state
    pub async fn record_game(&self, player: Player<'_>, result: &ScoreResult) -> Result<GameRecord> {
        let _guard = self.write_lock.lock().await;
        let now = self.clock.now();

        let mut book: ProgressBook = store::load_or_default(self.store.as_ref(), Slot::UserProgress).await;
        let mut board = self.leaderboard().await;

        let (record, touched) = apply_game(&mut book, &mut board, player, result, now);

        if touched {
            store::save(self.store.as_ref(), Slot::Leaderboard, &board).await?;
        }
        store::save(self.store.as_ref(), Slot::UserProgress, &book).await?;

        tracing::debug!(
            "Recorded {} for {} ({} games, {}/6 outcomes)",
            result.outcome,
            player.identity,
            record.progress.games_played,
            record.progress.completed_outcomes.len()
        );

        Ok(record)
    }

    /// Progress for one identity
    pub async fn progress_for(&self, identity: &str) -> Option<UserProgress> {
        let book: ProgressBook = store::load_or_default(self.store.as_ref(), Slot::UserProgress).await;
        book.get(identity).cloned()
    }

    /// Full persisted leaderboard
    pub async fn leaderboard(&self) -> Leaderboard {
        let entries: Vec<LeaderboardEntry> =
            store::load_or_default(self.store.as_ref(), Slot::Leaderboard).await;
        Leaderboard::from_entries(entries)
    }

    /// Up to `limit` (≤ 10) entries, fastest first
    pub async fn top_entries(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.leaderboard().await.top(limit).to_vec()
    }

    /// Replace the stored photo of an existing progress record.
    ///
    /// Returns false when the identity has no progress yet.
    pub async fn set_photo(&self, identity: &str, photo: Option<ImageRef>) -> Result<bool> {
        let _guard = self.write_lock.lock().await;

        let mut book: ProgressBook = store::load_or_default(self.store.as_ref(), Slot::UserProgress).await;
        let Some(progress) = book.get_mut(identity) else {
            return Ok(false);
        };
        progress.photo = photo;

        store::save(self.store.as_ref(), Slot::UserProgress, &book).await?;
        Ok(true)
    }
}
