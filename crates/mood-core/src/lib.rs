//! Core rules for Moodpet: a mood journal with a pet that evolves.
//!
//! This crate holds the data model and every rule with a temporal or
//! stateful edge: diary entries keyed by calendar date, the logging streak,
//! daily potion grants with a shared cap, pet feeding and evolution, and the
//! once-per-day fortune draw. It never touches storage; see `mood-journal`
//! for sessions and persistence.

/// Weekly mood advice derived from recent diary scores.
pub mod advice;
/// Static content tables: activity tags, reflections, prompts, facts, fortune slips.
pub mod catalog;
/// Diary entries and the date-ordered diary.
pub mod diary;
/// Error types used throughout the crate.
pub mod error;
/// The once-per-day fortune gate.
pub mod fortune;
/// Aggregate statistics over the whole diary.
pub mod insights;
/// The seven moods and per-mood tallies.
pub mod mood;
/// Pet progression: potions, feeding, evolution, and resets.
pub mod pet;
/// Recording a journal entry and its rewards.
pub mod record;
/// Consecutive-day logging streaks.
pub mod streak;

/// Re-export advice types.
pub use advice::{Advice, weekly_advice};
/// Re-export catalog types.
pub use catalog::ActivityTag;
/// Re-export diary types.
pub use diary::{Diary, Entry};
/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export fortune types.
pub use fortune::{FortuneDraw, FortuneResult, FortuneState, FortuneTier, draw_fortune};
/// Re-export insight types.
pub use insights::Insights;
/// Re-export mood types.
pub use mood::{Mood, MoodTally};
/// Re-export pet types.
pub use pet::{FeedOutcome, PetForm, PetState, PotionGrant};
/// Re-export entry recording types.
pub use record::{EntryDraft, EntryReward, POINTS_PER_ENTRY, record_entry};
/// Re-export the streak calculator.
pub use streak::current_streak;
