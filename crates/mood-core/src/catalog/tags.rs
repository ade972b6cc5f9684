//! Activity tags attached to diary entries.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An activity or cause the user associates with an entry.
///
/// Persisted by its full label (word plus emoji), e.g. `"Work 💻"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActivityTag {
    /// Work 💻
    #[serde(rename = "Work 💻")]
    Work,
    /// Exercise 🏋️
    #[serde(rename = "Exercise 🏋️")]
    Exercise,
    /// Socializing 👥
    #[serde(rename = "Socializing 👥")]
    Socializing,
    /// Food 🍕
    #[serde(rename = "Food 🍕")]
    Food,
    /// Family ❤️
    #[serde(rename = "Family ❤️")]
    Family,
    /// Hobbies 🎨
    #[serde(rename = "Hobbies 🎨")]
    Hobbies,
    /// Rest 🛋️
    #[serde(rename = "Rest 🛋️")]
    Rest,
    /// Study 📚
    #[serde(rename = "Study 📚")]
    Study,
    /// Travel ✈️
    #[serde(rename = "Travel ✈️")]
    Travel,
    /// Nature 🏞️
    #[serde(rename = "Nature 🏞️")]
    Nature,
    /// Money 💰
    #[serde(rename = "Money 💰")]
    Money,
}

impl ActivityTag {
    /// All tags in catalog order.
    pub const ALL: [ActivityTag; 11] = [
        ActivityTag::Work,
        ActivityTag::Exercise,
        ActivityTag::Socializing,
        ActivityTag::Food,
        ActivityTag::Family,
        ActivityTag::Hobbies,
        ActivityTag::Rest,
        ActivityTag::Study,
        ActivityTag::Travel,
        ActivityTag::Nature,
        ActivityTag::Money,
    ];

    /// The bare word, e.g. `"Work"`.
    pub fn word(self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Exercise => "Exercise",
            Self::Socializing => "Socializing",
            Self::Food => "Food",
            Self::Family => "Family",
            Self::Hobbies => "Hobbies",
            Self::Rest => "Rest",
            Self::Study => "Study",
            Self::Travel => "Travel",
            Self::Nature => "Nature",
            Self::Money => "Money",
        }
    }

    /// The full persisted label, e.g. `"Work 💻"`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Work => "Work 💻",
            Self::Exercise => "Exercise 🏋️",
            Self::Socializing => "Socializing 👥",
            Self::Food => "Food 🍕",
            Self::Family => "Family ❤️",
            Self::Hobbies => "Hobbies 🎨",
            Self::Rest => "Rest 🛋️",
            Self::Study => "Study 📚",
            Self::Travel => "Travel ✈️",
            Self::Nature => "Nature 🏞️",
            Self::Money => "Money 💰",
        }
    }

    /// Parse a tag from its label or its bare word (case-insensitive).
    pub fn parse(input: &str) -> CoreResult<ActivityTag> {
        let trimmed = input.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.is_named(trimmed))
            .ok_or_else(|| CoreError::UnknownTag(trimmed.to_string()))
    }

    fn is_named(self, input: &str) -> bool {
        self.label() == input || self.word().eq_ignore_ascii_case(input)
    }
}

impl std::fmt::Display for ActivityTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
