//! Diary entries and the date-ordered diary.

pub mod entry;
pub mod store;

pub use entry::Entry;
pub use store::{Diary, MonthCell};
