//! Sessions and persistence for Moodpet.
//!
//! A [`Session`] holds one user's diary, points, pet, and today's fortune.
//! Every action mutates that state in memory and then saves the whole
//! record once through a [`StateStore`]. Stores are swappable: JSON files on
//! disk for real use, an in-memory map for tests and embedding.

pub mod config;
pub mod error;
pub mod persist;
pub mod session;
pub mod user;

pub use config::JournalConfig;
pub use error::{JournalError, JournalResult};
pub use persist::{JsonFileStore, MemoryStore, PersistedState, StateStore};
pub use session::Session;
pub use user::UserKey;
