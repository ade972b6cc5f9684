//! Error types for sessions and persistence.

use thiserror::Error;

/// Result type for journal operations.
pub type JournalResult<T> = Result<T, JournalError>;

/// Errors that can occur while opening, mutating, or saving a session.
///
/// Only persistence failures and bad user input end up here. Exhausted
/// potions, a reached daily cap, or an already-drawn fortune are ordinary
/// outcomes reported by the action itself.
#[derive(Debug, Error)]
pub enum JournalError {
    /// The display name was empty after trimming.
    #[error("user name must not be empty")]
    EmptyName,

    /// A stored record exists but could not be parsed.
    #[error("stored record for '{key}' is malformed: {source}")]
    Malformed {
        /// The user key whose record is corrupt.
        key: String,
        /// The parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// Serializing a record failed.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Reading or writing storage failed.
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid user input reported by the core.
    #[error("{0}")]
    Core(#[from] mood_core::CoreError),
}
