//! JSON files on disk, one per user.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::StateStore;
use super::record::PersistedState;
use crate::error::{JournalError, JournalResult};
use crate::user::UserKey;

/// Stores each user's record as `diary_<key>.json` in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// A store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The storage directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a user's record.
    pub fn path_for(&self, key: &UserKey) -> PathBuf {
        self.dir.join(key.file_name())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self, key: &UserKey) -> JournalResult<Option<PersistedState>> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        PersistedState::from_json(&raw)
            .map(Some)
            .map_err(|source| JournalError::Malformed {
                key: key.to_string(),
                source,
            })
    }

    fn save(&mut self, key: &UserKey, state: &PersistedState) -> JournalResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let json = state.to_json()?;
        fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "saved record");
        Ok(())
    }
}
