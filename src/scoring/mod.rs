pub mod chaos;
pub mod letters;

use chrono::{DateTime, Utc};
use rand::RngCore;

use crate::core::ScoreResult;

pub use chaos::ChaosScorer;
pub use letters::{leftover_count, normalize_name};

/// Trait for compatibility scoring implementations
///
/// Callers must only pass names that are non-blank after trimming. Time and
/// randomness are supplied by the caller so results can be reproduced.
pub trait Scorer: Send + Sync {
    /// Score two names into a full six-way breakdown
    fn score(
        &self,
        name1: &str,
        name2: &str,
        now: DateTime<Utc>,
        rng: &mut dyn RngCore,
    ) -> ScoreResult;

    /// Get scorer name for logging
    fn name(&self) -> &str;
}

/// Score with the default [`ChaosScorer`]
pub fn score(name1: &str, name2: &str, now: DateTime<Utc>, rng: &mut dyn RngCore) -> ScoreResult {
    ChaosScorer::new().score(name1, name2, now, rng)
}
