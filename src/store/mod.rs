pub mod envelope;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

use crate::error::Result;

pub use envelope::SCHEMA_VERSION;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Trait for key-value persistence backends
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Get raw value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`; returns whether it existed
    async fn remove(&self, key: &str) -> Result<bool>;

    /// Get backend name for logging
    fn name(&self) -> &str;
}

/// Named slots of the persisted application state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Current session identity
    User,
    /// Identity key → progress map
    UserProgress,
    /// Ranked completions
    Leaderboard,
    /// Most recent score result
    LastGameResult,
}

impl Slot {
    pub fn key(self) -> &'static str {
        match self {
            Slot::User => "user",
            Slot::UserProgress => "userProgress",
            Slot::Leaderboard => "leaderboard",
            Slot::LastGameResult => "lastGameResult",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Read a slot, treating missing, unreadable or corrupt data as absent
pub async fn load_optional<T: DeserializeOwned>(store: &dyn KvStore, slot: Slot) -> Option<T> {
    let raw = match store.get(slot.key()).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("Failed to read slot '{}' from {}: {}", slot, store.name(), e);
            return None;
        }
    };

    match envelope::decode(slot, &raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Discarding unreadable slot '{}': {}", slot, e);
            None
        }
    }
}

/// Read a slot, falling back to the type's default
pub async fn load_or_default<T: DeserializeOwned + Default>(store: &dyn KvStore, slot: Slot) -> T {
    load_optional(store, slot).await.unwrap_or_default()
}

/// Write a slot in the current schema version
pub async fn save<T: Serialize>(store: &dyn KvStore, slot: Slot, value: &T) -> Result<()> {
    let raw = envelope::encode(value)?;
    store.set(slot.key(), &raw).await
}

/// Remove a slot
pub async fn clear(store: &dyn KvStore, slot: Slot) -> Result<bool> {
    store.remove(slot.key()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_slot_round_trip() {
        let store = MemoryStore::new();
        let mut value = HashMap::new();
        value.insert("a".to_string(), 1u32);

        save(&store, Slot::UserProgress, &value).await.unwrap();
        let loaded: HashMap<String, u32> = load_or_default(&store, Slot::UserProgress).await;
        assert_eq!(loaded, value);
    }

    #[tokio::test]
    async fn test_missing_and_corrupt_slots_read_as_default() {
        let store = MemoryStore::new();

        let missing: Vec<u32> = load_or_default(&store, Slot::Leaderboard).await;
        assert!(missing.is_empty());

        store.set(Slot::Leaderboard.key(), "{not json").await.unwrap();
        let corrupt: Vec<u32> = load_or_default(&store, Slot::Leaderboard).await;
        assert!(corrupt.is_empty());

        let absent: Option<Vec<u32>> = load_optional(&store, Slot::Leaderboard).await;
        assert!(absent.is_none());
    }

    #[tokio::test]
    async fn test_clear_slot() {
        let store = MemoryStore::new();
        save(&store, Slot::User, &"someone").await.unwrap();

        assert!(clear(&store, Slot::User).await.unwrap());
        assert!(!clear(&store, Slot::User).await.unwrap());
        assert!(load_optional::<String>(&store, Slot::User).await.is_none());
    }
}
