//! Daily writing prompts.
//!
//! The prompt for a date is a pure function of that date, so every view of
//! the same day shows the same prompt without touching any random source.

use chrono::{Datelike, NaiveDate};

/// Writing prompts, indexed by date ordinal.
pub const DAILY_PROMPTS: &[&str] = &[
    "What is one thing that made you feel proud or accomplished today?",
    "If you could give yesterday's self one piece of advice, what would it be?",
    "Describe three sounds, smells, or sights you encountered today.",
    "Did you express gratitude to anyone today, or did someone make you feel grateful?",
    "What is one small thing you can do tomorrow to make it better?",
    "What is a new thing you learned today, no matter how small?",
];

/// Index into [`DAILY_PROMPTS`] for a date: its ordinal (0001-01-01 is day 1)
/// modulo the number of prompts.
pub fn prompt_index(date: NaiveDate) -> usize {
    let len = DAILY_PROMPTS.len() as i32;
    date.num_days_from_ce().rem_euclid(len) as usize
}

/// The prompt shown for a date.
pub fn daily_prompt(date: NaiveDate) -> &'static str {
    DAILY_PROMPTS[prompt_index(date)]
}
