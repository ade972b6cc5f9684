//! The on-disk record layout.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use mood_core::{Diary, FortuneResult, PetState};

/// One user's complete persisted state.
///
/// Field names and shapes are the storage format. Every field tolerates
/// being absent so older or partial records still load, and unreadable
/// diary entries or unknown tags are skipped rather than failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// Diary entries keyed by `YYYY-MM-DD`.
    #[serde(default)]
    pub diary: Diary,
    /// Points earned so far.
    #[serde(default)]
    pub total_points: u32,
    /// Display name as entered.
    #[serde(default)]
    pub user_name: String,
    /// Whether `fortune_result` was drawn on `fortune_date`.
    #[serde(default)]
    pub fortune_drawn: bool,
    /// The drawn fortune as `[level, symbol, description]`.
    #[serde(default)]
    pub fortune_result: Option<FortuneResult>,
    /// Day the fortune fields refer to.
    #[serde(default)]
    pub fortune_date: Option<NaiveDate>,
    /// Pet state; created fresh when missing.
    #[serde(default)]
    pub elf_state: Option<PetState>,
}

impl PersistedState {
    /// Parse a record from JSON text.
    pub fn from_json(raw: &str) -> serde_json::Result<PersistedState> {
        serde_json::from_str(raw)
    }

    /// Render the record as pretty JSON (4-space indent, UTF-8 kept as is).
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mood_core::{Entry, Mood};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn sample() -> PersistedState {
        let mut diary = Diary::new();
        diary.upsert(day(1), Entry::new(Mood::Happy, "hi", "Yay!", []));
        PersistedState {
            diary,
            total_points: 10,
            user_name: "Alex Smith".to_string(),
            fortune_drawn: false,
            fortune_result: None,
            fortune_date: Some(day(1)),
            elf_state: Some(PetState::new(day(1))),
        }
    }

    #[test]
    fn layout_has_every_field() {
        let text = sample().to_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["diary"]["2024-06-01"]["mood"], "😀");
        assert_eq!(json["total_points"], 10);
        assert_eq!(json["user_name"], "Alex Smith");
        assert_eq!(json["fortune_drawn"], false);
        assert!(json["fortune_result"].is_null());
        assert_eq!(json["fortune_date"], "2024-06-01");
        assert_eq!(json["elf_state"]["evolution_threshold"], 30);
    }

    #[test]
    fn pretty_output_keeps_emoji_and_indents_four() {
        let text = sample().to_json().unwrap();
        assert!(text.contains("😀"));
        assert!(text.contains("\n    \"diary\""));
        assert_eq!(PersistedState::from_json(&text).unwrap(), sample());
    }

    #[test]
    fn minimal_record_loads() {
        let state = PersistedState::from_json(r#"{"diary": {}}"#).unwrap();
        assert_eq!(state.total_points, 0);
        assert!(state.elf_state.is_none());
        assert!(state.fortune_result.is_none());

        let state = PersistedState::from_json("{}").unwrap();
        assert!(state.diary.is_empty());
    }

    #[test]
    fn one_bad_entry_does_not_lose_the_record() {
        let raw = r#"{
            "diary": {
                "2024-06-01": {"mood": "", "text": "", "response": "", "score": 3},
                "2024-06-02": {"mood": "😀", "score": 5, "tags": ["Juggling"]}
            },
            "total_points": 20,
            "user_name": "Alex Smith"
        }"#;
        let state = PersistedState::from_json(raw).unwrap();
        assert_eq!(state.total_points, 20);
        assert_eq!(state.diary.len(), 1);
        assert!(state.diary.get(day(2)).unwrap().tags.is_empty());
    }
}
