//! The persistence gateway.
//!
//! The session never touches storage directly. It builds a
//! [`PersistedState`] and hands it to a [`StateStore`], which saves the
//! whole record at once. Concurrent sessions on the same key are
//! last-write-wins; stores provide no locking.

pub mod file;
pub mod memory;
pub mod record;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::PersistedState;

use crate::error::JournalResult;
use crate::user::UserKey;

/// Load/save contract for per-user records.
pub trait StateStore {
    /// Load a user's record. `Ok(None)` means no record exists yet;
    /// [`JournalError::Malformed`](crate::JournalError::Malformed) means the
    /// record exists but is corrupt.
    fn load(&self, key: &UserKey) -> JournalResult<Option<PersistedState>>;

    /// Save a user's full record, replacing any previous one.
    fn save(&mut self, key: &UserKey, state: &PersistedState) -> JournalResult<()>;
}
