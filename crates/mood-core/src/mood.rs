//! The seven moods and per-mood tallies.
//!
//! Moods are a closed set. Their declaration order is the canonical order
//! used by every order-dependent rule (evolution type, advice, insights), so
//! ties always resolve toward the mood declared first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// A mood a diary entry can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    /// 😀, score 5.
    Happy,
    /// 😢, score 1.
    Sad,
    /// 😡, score 1.
    Angry,
    /// 😌, score 3.
    Calm,
    /// 🤩, score 4.
    Excited,
    /// 😴, score 2.
    Tired,
    /// 😥, score 1.
    Anxious,
}

impl Mood {
    /// All moods in canonical order.
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Excited,
        Mood::Tired,
        Mood::Anxious,
    ];

    /// The emoji symbol stored in diary entries.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Happy => "😀",
            Self::Sad => "😢",
            Self::Angry => "😡",
            Self::Calm => "😌",
            Self::Excited => "🤩",
            Self::Tired => "😴",
            Self::Anxious => "😥",
        }
    }

    /// The mood score (1-5) recorded with an entry.
    pub fn score(self) -> u8 {
        match self {
            Self::Happy => 5,
            Self::Excited => 4,
            Self::Calm => 3,
            Self::Tired => 2,
            Self::Sad | Self::Angry | Self::Anxious => 1,
        }
    }

    /// Capitalized display name, e.g. `"Happy"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Happy => "Happy",
            Self::Sad => "Sad",
            Self::Angry => "Angry",
            Self::Calm => "Calm",
            Self::Excited => "Excited",
            Self::Tired => "Tired",
            Self::Anxious => "Anxious",
        }
    }

    /// Lowercase key used in persisted potion and feed maps, e.g. `"happy"`.
    pub fn key(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Sad => "sad",
            Self::Angry => "angry",
            Self::Calm => "calm",
            Self::Excited => "excited",
            Self::Tired => "tired",
            Self::Anxious => "anxious",
        }
    }

    /// Look up a mood by its emoji symbol.
    pub fn from_symbol(symbol: &str) -> Option<Mood> {
        let symbol = symbol.trim();
        Self::ALL.into_iter().find(|m| m.symbol() == symbol)
    }

    /// Parse a mood from a symbol, key, or name (case-insensitive).
    pub fn parse(input: &str) -> Option<Mood> {
        let trimmed = input.trim();
        if let Some(mood) = Self::from_symbol(trimmed) {
            return Some(mood);
        }
        let lower = trimmed.to_lowercase();
        Self::ALL.into_iter().find(|m| m.key() == lower)
    }

    /// Like [`Mood::parse`], but reports unknown input as an error.
    pub fn parse_strict(input: &str) -> CoreResult<Mood> {
        Self::parse(input)
            .ok_or_else(|| CoreError::UnknownMood(input.trim().to_string()))
    }
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Serde adapter that stores a [`Mood`] as its emoji symbol.
pub mod as_symbol {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::Mood;

    /// Serialize a mood as its symbol.
    pub fn serialize<S: Serializer>(mood: &Mood, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(mood.symbol())
    }

    /// Deserialize a mood from its symbol (keys and names are accepted too).
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Mood, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Mood::parse(&raw).ok_or_else(|| D::Error::custom(format!("unknown mood symbol: {raw}")))
    }
}

/// A non-negative count per mood that always holds all seven keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Mood, u32>", into = "BTreeMap<Mood, u32>")]
pub struct MoodTally {
    counts: BTreeMap<Mood, u32>,
}

impl MoodTally {
    /// A tally with every mood set to `value`.
    pub fn filled(value: u32) -> Self {
        Self {
            counts: Mood::ALL.into_iter().map(|m| (m, value)).collect(),
        }
    }

    /// A tally with every mood at zero.
    pub fn zeroed() -> Self {
        Self::filled(0)
    }

    /// Count for one mood.
    pub fn get(&self, mood: Mood) -> u32 {
        self.counts.get(&mood).copied().unwrap_or(0)
    }

    /// Increment one mood's count.
    pub fn add_one(&mut self, mood: Mood) {
        let count = self.counts.entry(mood).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Decrement one mood's count. Returns false (and changes nothing) at zero.
    pub fn take_one(&mut self, mood: Mood) -> bool {
        match self.counts.get_mut(&mood) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Sum over all moods.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// The mood with the strictly greatest count; the first in canonical
    /// order wins a tie. `None` when every count is zero.
    pub fn max_mood(&self) -> Option<Mood> {
        let mut best: Option<(Mood, u32)> = None;
        for mood in Mood::ALL {
            let count = self.get(mood);
            if count > 0 && best.is_none_or(|(_, top)| count > top) {
                best = Some((mood, count));
            }
        }
        best.map(|(mood, _)| mood)
    }

    /// Iterate `(mood, count)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Mood, u32)> + '_ {
        Mood::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}

impl Default for MoodTally {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<BTreeMap<Mood, u32>> for MoodTally {
    fn from(mut counts: BTreeMap<Mood, u32>) -> Self {
        for mood in Mood::ALL {
            counts.entry(mood).or_insert(0);
        }
        Self { counts }
    }
}

impl From<MoodTally> for BTreeMap<Mood, u32> {
    fn from(tally: MoodTally) -> Self {
        tally.counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_match_table() {
        let scores: Vec<u8> = Mood::ALL.iter().map(|m| m.score()).collect();
        assert_eq!(scores, vec![5, 1, 1, 3, 4, 2, 1]);
    }

    #[test]
    fn parse_accepts_symbol_key_and_name() {
        assert_eq!(Mood::parse("😀"), Some(Mood::Happy));
        assert_eq!(Mood::parse("calm"), Some(Mood::Calm));
        assert_eq!(Mood::parse("  Anxious "), Some(Mood::Anxious));
        assert_eq!(Mood::parse("bored"), None);
        assert!(Mood::parse_strict("🙃").is_err());
    }

    #[test]
    fn symbols_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(Mood::from_symbol(mood.symbol()), Some(mood));
        }
    }

    #[test]
    fn tally_serializes_with_lowercase_keys() {
        let tally = MoodTally::filled(5);
        let json = serde_json::to_value(&tally).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert_eq!(obj["happy"], 5);
        assert_eq!(obj["anxious"], 5);
    }

    #[test]
    fn tally_fills_missing_keys_on_load() {
        let tally: MoodTally = serde_json::from_str(r#"{"sad": 2}"#).unwrap();
        assert_eq!(tally.get(Mood::Sad), 2);
        assert_eq!(tally.get(Mood::Happy), 0);
        assert_eq!(tally.iter().count(), 7);
    }

    #[test]
    fn take_one_stops_at_zero() {
        let mut tally = MoodTally::zeroed();
        assert!(!tally.take_one(Mood::Calm));
        tally.add_one(Mood::Calm);
        assert!(tally.take_one(Mood::Calm));
        assert_eq!(tally.get(Mood::Calm), 0);
    }

    #[test]
    fn max_mood_prefers_canonical_order_on_tie() {
        let mut tally = MoodTally::zeroed();
        for _ in 0..3 {
            tally.add_one(Mood::Sad);
            tally.add_one(Mood::Happy);
        }
        assert_eq!(tally.max_mood(), Some(Mood::Happy));
        tally.add_one(Mood::Sad);
        assert_eq!(tally.max_mood(), Some(Mood::Sad));
        assert_eq!(MoodTally::zeroed().max_mood(), None);
    }
}
