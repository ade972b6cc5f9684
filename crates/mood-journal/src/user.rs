//! User identity.

use crate::error::{JournalError, JournalResult};

/// Storage key derived from a display name.
///
/// The name is trimmed, lowercased, and spaces become underscores. Two
/// display names that normalize to the same key are the same user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserKey(String);

impl UserKey {
    /// Normalize a display name into a key.
    pub fn from_display_name(name: &str) -> JournalResult<UserKey> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(JournalError::EmptyName);
        }
        Ok(UserKey(trimmed.to_lowercase().replace(' ', "_")))
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of this user's record.
    pub fn file_name(&self) -> String {
        format!("diary_{}.json", self.0)
    }
}

impl std::fmt::Display for UserKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
