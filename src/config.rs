use crate::ledger::LEADERBOARD_CAPACITY;

/// Default database location
pub const DEFAULT_DB_PATH: &str = "flareup.db";

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// SQLite database path (`:memory:` for an ephemeral store)
    pub db_path: String,

    /// Fixed RNG seed for reproducible runs; entropy when `None`
    pub seed: Option<u64>,

    /// How many leaderboard entries queries return by default (1-10)
    pub leaderboard_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            seed: None,
            leaderboard_limit: LEADERBOARD_CAPACITY,
        }
    }
}

impl EngineConfig {
    /// Defaults overridden by `FLAREUP_DB_PATH`, `FLAREUP_SEED` and
    /// `FLAREUP_LEADERBOARD_LIMIT`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("FLAREUP_DB_PATH").filter(|p| !p.trim().is_empty()) {
            config.db_path = path;
        }

        if let Some(raw) = lookup("FLAREUP_SEED") {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => tracing::warn!("Ignoring invalid FLAREUP_SEED: {}", raw),
            }
        }

        if let Some(raw) = lookup("FLAREUP_LEADERBOARD_LIMIT") {
            match raw.trim().parse::<usize>() {
                Ok(limit) => config.leaderboard_limit = limit.clamp(1, LEADERBOARD_CAPACITY),
                Err(_) => tracing::warn!("Ignoring invalid FLAREUP_LEADERBOARD_LIMIT: {}", raw),
            }
        }

        config
    }

    pub fn with_db_path(mut self, db_path: impl Into<String>) -> Self {
        self.db_path = db_path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
