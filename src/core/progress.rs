use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::core::{ImageRef, OutcomeCategory};

/// Per-user record of which outcomes have been achieved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Stable identity key (email)
    pub identity: String,

    pub display_name: String,

    /// Achieved outcomes, iterated in canonical order
    #[serde(default)]
    pub completed_outcomes: BTreeSet<OutcomeCategory>,

    #[serde(default)]
    pub games_played: u32,

    pub started_at: DateTime<Utc>,

    pub last_played_at: DateTime<Utc>,

    /// Photo captured from the first recorded game
    #[serde(default)]
    pub photo: Option<ImageRef>,
}

impl UserProgress {
    /// Fresh progress for a user who has not played yet
    pub fn new(
        identity: impl Into<String>,
        display_name: impl Into<String>,
        started_at: DateTime<Utc>,
        photo: Option<ImageRef>,
    ) -> Self {
        Self {
            identity: identity.into(),
            display_name: display_name.into(),
            completed_outcomes: BTreeSet::new(),
            games_played: 0,
            started_at,
            last_played_at: started_at,
            photo,
        }
    }

    /// Count a game; returns true when `outcome` was new for this user
    pub fn record(&mut self, outcome: OutcomeCategory, now: DateTime<Utc>) -> bool {
        self.games_played = self.games_played.saturating_add(1);
        if now > self.last_played_at {
            self.last_played_at = now;
        }
        self.completed_outcomes.insert(outcome)
    }

    /// All six outcomes achieved
    pub fn is_complete(&self) -> bool {
        self.completed_outcomes.len() == OutcomeCategory::COUNT
    }

    pub fn has_achieved(&self, outcome: OutcomeCategory) -> bool {
        self.completed_outcomes.contains(&outcome)
    }

    /// Outcomes still missing, in canonical order
    pub fn remaining(&self) -> Vec<OutcomeCategory> {
        OutcomeCategory::ALL
            .iter()
            .copied()
            .filter(|c| !self.completed_outcomes.contains(c))
            .collect()
    }

    /// Fraction of outcomes achieved (0.0 - 1.0)
    pub fn completion_ratio(&self) -> f64 {
        self.completed_outcomes.len() as f64 / OutcomeCategory::COUNT as f64
    }
}

/// Ranked record of a user who achieved every outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub identity: String,
    pub display_name: String,
    pub completed_outcomes: BTreeSet<OutcomeCategory>,
    pub games_played: u32,

    /// Milliseconds between the first game and the qualifying game
    pub completion_duration_ms: i64,

    #[serde(default)]
    pub photo: Option<ImageRef>,

    pub recorded_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    /// Snapshot a completed progress record at `now`
    pub fn from_progress(progress: &UserProgress, now: DateTime<Utc>) -> Self {
        let completion_duration_ms = (now - progress.started_at).num_milliseconds().max(0);
        Self {
            identity: progress.identity.clone(),
            display_name: progress.display_name.clone(),
            completed_outcomes: progress.completed_outcomes.clone(),
            games_played: progress.games_played,
            completion_duration_ms,
            photo: progress.photo.clone(),
            recorded_at: now,
        }
    }

    /// Completion time formatted for display
    pub fn completion_time(&self) -> String {
        format_duration_ms(self.completion_duration_ms)
    }
}

/// Format a millisecond span as `"2d 3h"`, `"4h 12m"` or `"7m"`
pub fn format_duration_ms(milliseconds: i64) -> String {
    let minutes = milliseconds.max(0) / (1000 * 60);
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d {}h", days, hours % 24)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_record_counts_and_dedups() {
        let start = Utc::now();
        let mut progress = UserProgress::new("alice@example.com", "Alice", start, None);

        assert!(progress.record(OutcomeCategory::Love, start));
        assert!(!progress.record(OutcomeCategory::Love, start + Duration::seconds(5)));
        assert_eq!(progress.games_played, 2);
        assert_eq!(progress.completed_outcomes.len(), 1);
        assert_eq!(progress.last_played_at, start + Duration::seconds(5));
    }

    #[test]
    fn test_remaining_and_ratio() {
        let mut progress = UserProgress::new("a", "A", Utc::now(), None);
        progress.record(OutcomeCategory::Single, Utc::now());
        progress.record(OutcomeCategory::Friends, Utc::now());

        assert_eq!(
            progress.remaining(),
            vec![
                OutcomeCategory::Love,
                OutcomeCategory::Affection,
                OutcomeCategory::Marriage,
                OutcomeCategory::Enemies,
            ]
        );
        assert!((progress.completion_ratio() - 2.0 / 6.0).abs() < f64::EPSILON);
        assert!(!progress.is_complete());
    }

    #[test]
    fn test_entry_duration() {
        let start = Utc::now();
        let mut progress = UserProgress::new("a", "A", start, None);
        for outcome in OutcomeCategory::ALL {
            progress.record(outcome, start);
        }

        let entry = LeaderboardEntry::from_progress(&progress, start + Duration::minutes(90));
        assert_eq!(entry.completion_duration_ms, 90 * 60 * 1000);
        assert_eq!(entry.games_played, 6);
        assert_eq!(entry.completion_time(), "1h 30m");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration_ms(0), "0m");
        assert_eq!(format_duration_ms(59_999), "0m");
        assert_eq!(format_duration_ms(7 * 60 * 1000), "7m");
        assert_eq!(format_duration_ms((4 * 60 + 12) * 60 * 1000), "4h 12m");
        assert_eq!(format_duration_ms((51 * 60) * 60 * 1000), "2d 3h");
        assert_eq!(format_duration_ms(-5), "0m");
    }
}
