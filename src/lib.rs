//! # FLAREUP Engine
//!
//! Core of the FLAREUP name-compatibility quiz:
//! - Chaotic FLAMES scoring (Friends, Love, Affection, Marriage, Enemies, Single)
//! - Per-user progress towards collecting all six outcomes
//! - Top-10 leaderboard of the fastest full completions
//! - Pluggable key-value persistence (SQLite or in-memory)
//! - Result narratives and share text for front ends
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use flareup_engine::{EngineConfig, FlareupEngine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = FlareupEngine::new(&EngineConfig::default()).await?;
//!
//!     engine.sign_in("Alice", "alice@example.com").await?;
//!     let played = engine.compute_and_store_result("Alice", "Bob", None, None).await?;
//!
//!     println!("{} - {}%", played.result.outcome, played.result.primary_percentage);
//!     println!("{}", played.narrative().headline);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod narrative;
pub mod scoring;
pub mod store;

// Re-export primary types
pub use crate::core::{
    Breakdown, ImageRef, LeaderboardEntry, OutcomeCategory, ScoreResult, UserProgress, UserSession,
};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::EngineConfig;
pub use engine::{FlareupEngine, PlayedGame};
pub use error::{FlareupError, Result};
pub use ledger::{GameRecord, Leaderboard, ProgressLedger};
pub use narrative::Narrative;
pub use scoring::{ChaosScorer, Scorer};
pub use store::{KvStore, MemoryStore, SqliteStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
