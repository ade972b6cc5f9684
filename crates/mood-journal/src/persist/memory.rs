//! In-memory store.

use std::collections::HashMap;

use super::StateStore;
use super::record::PersistedState;
use crate::error::{JournalError, JournalResult};
use crate::user::UserKey;

/// Keeps records as JSON text in memory and counts saves.
///
/// Useful for tests and for front ends that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<UserKey, String>,
    saves: usize,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw record text for a key, bypassing validation.
    pub fn insert_raw(&mut self, key: &UserKey, raw: impl Into<String>) {
        self.records.insert(key.clone(), raw.into());
    }

    /// Raw record text for a key.
    pub fn raw(&self, key: &UserKey) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&self, key: &UserKey) -> JournalResult<Option<PersistedState>> {
        let Some(raw) = self.records.get(key) else {
            return Ok(None);
        };
        PersistedState::from_json(raw)
            .map(Some)
            .map_err(|source| JournalError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    fn save(&mut self, key: &UserKey, state: &PersistedState) -> JournalResult<()> {
        self.records.insert(key.clone(), state.to_json()?);
        self.saves += 1;
        Ok(())
    }
}
