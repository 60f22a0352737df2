use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex};

use crate::clock::{Clock, SystemClock};
use crate::config::EngineConfig;
use crate::core::{ImageRef, LeaderboardEntry, ScoreResult, UserProgress, UserSession};
use crate::error::{FlareupError, Result};
use crate::ledger::{GameRecord, Player, ProgressLedger, LEADERBOARD_CAPACITY};
use crate::narrative::Narrative;
use crate::scoring::{ChaosScorer, Scorer};
use crate::store::{self, KvStore, Slot, SqliteStore};

/// Main FLAREUP orchestrator: session, scoring, progress and leaderboard
pub struct FlareupEngine {
    store: Arc<dyn KvStore>,
    clock: Arc<dyn Clock>,
    scorer: Arc<dyn Scorer>,
    ledger: ProgressLedger,
    rng: Mutex<StdRng>,
    leaderboard_limit: usize,
}

/// A scored and recorded game
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedGame {
    pub result: ScoreResult,
    pub record: GameRecord,
}

impl PlayedGame {
    pub fn narrative(&self) -> Narrative {
        Narrative::for_result(&self.result)
    }
}

impl FlareupEngine {
    /// Create engine backed by the SQLite store at `config.db_path`
    pub async fn new(config: &EngineConfig) -> Result<Self> {
        let store = Arc::new(SqliteStore::new(&config.db_path).await?);
        tracing::info!("✅ FLAREUP store opened at {}", config.db_path);
        Ok(Self::with_store(store, config))
    }

    /// Create engine over any store, using the system clock and chaos scorer
    pub fn with_store(store: Arc<dyn KvStore>, config: &EngineConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let rng = match config.seed {
            Some(seed) => {
                tracing::debug!("Seeding scorer RNG with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        Self {
            ledger: ProgressLedger::new(store.clone(), clock.clone()),
            store,
            clock,
            scorer: Arc::new(ChaosScorer::new()),
            rng: Mutex::new(rng),
            leaderboard_limit: config.leaderboard_limit.clamp(1, LEADERBOARD_CAPACITY),
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.ledger = ProgressLedger::new(self.store.clone(), clock.clone());
        self.clock = clock;
        self
    }

    /// Replace the scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn Scorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Start a session for `email`, keeping photo and join date when the
    /// same identity signs in again
    pub async fn sign_in(&self, display_name: &str, email: &str) -> Result<UserSession> {
        if email.trim().is_empty() {
            return Err(FlareupError::BlankName { field: "email" });
        }

        let mut session = UserSession::new(display_name, email, self.clock.now());
        if let Some(previous) = self.current_user().await {
            if previous.email == session.email {
                session.join_date = previous.join_date;
                session.photo = previous.photo;
            }
        }

        store::save(self.store.as_ref(), Slot::User, &session).await?;
        tracing::info!("👋 {} signed in", session.display_name);
        Ok(session)
    }

    /// End the session; progress and leaderboard are kept
    pub async fn sign_out(&self) -> Result<()> {
        if store::clear(self.store.as_ref(), Slot::User).await? {
            tracing::info!("Signed out");
        }
        Ok(())
    }

    pub async fn current_user(&self) -> Option<UserSession> {
        store::load_optional(self.store.as_ref(), Slot::User).await
    }

    async fn require_user(&self) -> Result<UserSession> {
        self.current_user().await.ok_or(FlareupError::NoSession)
    }

    /// Rewrite the session's name and email
    pub async fn update_profile(&self, display_name: &str, email: &str) -> Result<UserSession> {
        if email.trim().is_empty() {
            return Err(FlareupError::BlankName { field: "email" });
        }

        let current = self.require_user().await?;
        let mut updated = UserSession::new(display_name, email, current.join_date);
        updated.photo = current.photo;

        store::save(self.store.as_ref(), Slot::User, &updated).await?;
        Ok(updated)
    }

    /// Set the session photo, mirroring it into existing progress
    pub async fn update_photo(&self, photo: Option<ImageRef>) -> Result<UserSession> {
        let mut session = self.require_user().await?;
        session.photo = photo.clone();

        store::save(self.store.as_ref(), Slot::User, &session).await?;
        self.ledger.set_photo(session.identity(), photo).await?;
        Ok(session)
    }

    /// Score two names for the signed-in user, store the result and record it
    pub async fn compute_and_store_result(
        &self,
        name1: &str,
        name2: &str,
        photo1: Option<ImageRef>,
        photo2: Option<ImageRef>,
    ) -> Result<PlayedGame> {
        if name1.trim().is_empty() {
            return Err(FlareupError::BlankName { field: "name1" });
        }
        if name2.trim().is_empty() {
            return Err(FlareupError::BlankName { field: "name2" });
        }
        let user = self.require_user().await?;

        let result = {
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            self.scorer.score(name1, name2, self.clock.now(), &mut *rng)
        }
        .with_photos(photo1, photo2);

        store::save(self.store.as_ref(), Slot::LastGameResult, &result).await?;

        let record = self.record_game(&user, &result).await?;

        tracing::info!(
            "✅ {} [{}] ({}/6 for {})",
            result.display(),
            self.scorer.name(),
            record.progress.completed_outcomes.len(),
            user.display_name
        );

        Ok(PlayedGame { result, record })
    }

    /// Apply an already scored result to a user's progress
    pub async fn record_game(&self, user: &UserSession, result: &ScoreResult) -> Result<GameRecord> {
        self.ledger
            .record_game(
                Player {
                    identity: user.identity(),
                    display_name: &user.display_name,
                },
                result,
            )
            .await
    }

    /// Most recent result; stays in place after being read
    pub async fn last_result(&self) -> Option<ScoreResult> {
        store::load_optional(self.store.as_ref(), Slot::LastGameResult).await
    }

    pub async fn current_user_progress(&self) -> Option<UserProgress> {
        let user = self.current_user().await?;
        self.ledger.progress_for(user.identity()).await
    }

    pub async fn progress_for(&self, identity: &str) -> Option<UserProgress> {
        self.ledger.progress_for(identity).await
    }

    /// Leaderboard with the configured default size
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.top_entries(self.leaderboard_limit).await
    }

    /// Up to `limit` (≤ 10) entries, fastest first
    pub async fn top_entries(&self, limit: usize) -> Vec<LeaderboardEntry> {
        self.ledger.top_entries(limit).await
    }

    /// 1-based leaderboard position of `identity`
    pub async fn rank_of(&self, identity: &str) -> Option<usize> {
        self.ledger.leaderboard().await.rank_of(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn engine() -> FlareupEngine {
        FlareupEngine::with_store(
            Arc::new(MemoryStore::new()),
            &EngineConfig::default().with_seed(3),
        )
    }

    #[tokio::test]
    async fn test_engine_creation() {
        let result = FlareupEngine::new(&EngineConfig::default().with_db_path(":memory:")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_play_requires_session() {
        let engine = engine();
        let err = engine
            .compute_and_store_result("Alice", "Bob", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, FlareupError::NoSession));
        assert!(engine.last_result().await.is_none());
    }

    #[tokio::test]
    async fn test_blank_names_rejected() {
        let engine = engine();
        engine.sign_in("Alice", "alice@example.com").await.unwrap();

        let err = engine
            .compute_and_store_result("  ", "Bob", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, FlareupError::BlankName { field: "name1" }));

        let err = engine
            .compute_and_store_result("Alice", "\t", None, None)
            .await
            .unwrap_err();
        assert!(matches!(err, FlareupError::BlankName { field: "name2" }));
        assert!(engine.current_user_progress().await.is_none());
    }

    #[tokio::test]
    async fn test_play_stores_result_and_progress() {
        let engine = engine();
        engine.sign_in("Alice", "alice@example.com").await.unwrap();

        let played = engine
            .compute_and_store_result("Alice", "Bob", Some(ImageRef::new("a.png")), None)
            .await
            .unwrap();

        assert_eq!(engine.last_result().await, Some(played.result.clone()));
        // reading does not clear it
        assert!(engine.last_result().await.is_some());

        let progress = engine.current_user_progress().await.unwrap();
        assert_eq!(progress.games_played, 1);
        assert!(progress.has_achieved(played.result.outcome));
        assert_eq!(progress.photo, Some(ImageRef::new("a.png")));
    }

    #[tokio::test]
    async fn test_sign_in_keeps_photo_for_same_identity() {
        let engine = engine();
        engine.sign_in("Alice", "alice@example.com").await.unwrap();
        engine.update_photo(Some(ImageRef::new("me.png"))).await.unwrap();

        let again = engine.sign_in("Ally", "alice@example.com").await.unwrap();
        assert_eq!(again.display_name, "Ally");
        assert_eq!(again.photo, Some(ImageRef::new("me.png")));

        let other = engine.sign_in("Bob", "bob@example.com").await.unwrap();
        assert_eq!(other.photo, None);
    }

    #[tokio::test]
    async fn test_sign_out_keeps_progress() {
        let engine = engine();
        engine.sign_in("Alice", "alice@example.com").await.unwrap();
        engine
            .compute_and_store_result("Alice", "Bob", None, None)
            .await
            .unwrap();

        engine.sign_out().await.unwrap();
        assert!(engine.current_user().await.is_none());
        assert!(engine.current_user_progress().await.is_none());
        assert!(engine.progress_for("alice@example.com").await.is_some());
    }

    #[tokio::test]
    async fn test_update_photo_mirrors_into_progress() {
        let engine = engine();
        engine.sign_in("Alice", "alice@example.com").await.unwrap();
        engine
            .compute_and_store_result("Alice", "Bob", None, None)
            .await
            .unwrap();

        engine.update_photo(Some(ImageRef::new("new.png"))).await.unwrap();
        assert_eq!(
            engine.current_user_progress().await.unwrap().photo,
            Some(ImageRef::new("new.png"))
        );
    }

    #[tokio::test]
    async fn test_update_profile() {
        let engine = engine();
        assert!(matches!(
            engine.update_profile("A", "a@example.com").await.unwrap_err(),
            FlareupError::NoSession
        ));

        let original = engine.sign_in("Alice", "alice@example.com").await.unwrap();
        let updated = engine.update_profile("Alicia", "alicia@example.com").await.unwrap();

        assert_eq!(updated.display_name, "Alicia");
        assert_eq!(updated.email, "alicia@example.com");
        assert_eq!(updated.join_date, original.join_date);
        assert_eq!(engine.current_user().await, Some(updated));
    }
}
