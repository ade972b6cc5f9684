//! A single diary entry.

use std::collections::BTreeSet;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::ActivityTag;
use crate::mood::{self, Mood};

/// One entry per calendar date.
///
/// The date is the key in [`Diary`](super::Diary), not a field here. The
/// `response` and `score` fields are derived when the entry is saved and
/// are overwritten on every re-save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// The mood, stored as its emoji symbol.
    #[serde(with = "mood::as_symbol")]
    pub mood: Mood,
    /// Free-form text, possibly empty.
    #[serde(default)]
    pub text: String,
    /// Reflection computed from `text` at save time.
    #[serde(default)]
    pub response: String,
    /// Mood score (1-5).
    pub score: u8,
    /// Activity tags; order is irrelevant. Unknown labels are dropped on load.
    #[serde(default, deserialize_with = "known_tags")]
    pub tags: BTreeSet<ActivityTag>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTag {
    Known(ActivityTag),
    Unknown(IgnoredAny),
}

fn known_tags<'de, D>(deserializer: D) -> Result<BTreeSet<ActivityTag>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Vec::<StoredTag>::deserialize(deserializer)?;
    Ok(stored
        .into_iter()
        .filter_map(|tag| match tag {
            StoredTag::Known(tag) => Some(tag),
            StoredTag::Unknown(_) => None,
        })
        .collect())
}

impl Entry {
    /// Build an entry, deriving the score from the mood.
    pub fn new(
        mood: Mood,
        text: impl Into<String>,
        response: impl Into<String>,
        tags: impl IntoIterator<Item = ActivityTag>,
    ) -> Self {
        Self {
            mood,
            text: text.into(),
            response: response.into(),
            score: mood.score(),
            tags: tags.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_follows_mood() {
        let e = Entry::new(Mood::Excited, "", "", []);
        assert_eq!(e.score, 4);
    }

    #[test]
    fn persisted_shape() {
        let e = Entry::new(
            Mood::Happy,
            "sunny walk",
            "Yay!",
            [ActivityTag::Nature, ActivityTag::Exercise, ActivityTag::Nature],
        );
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["mood"], "😀");
        assert_eq!(json["score"], 5);
        assert_eq!(json["tags"].as_array().unwrap().len(), 2);

        let back: Entry = serde_json::from_value(json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn unknown_tags_are_dropped() {
        let raw = r#"{"mood": "😀", "score": 5, "tags": ["Nature 🏞️", "Knitting"]}"#;
        let e: Entry = serde_json::from_str(raw).unwrap();
        assert_eq!(e.tags.len(), 1);
        assert!(e.tags.contains(&ActivityTag::Nature));
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let raw = r#"{"mood": "🙃", "text": "", "response": "", "score": 3, "tags": []}"#;
        assert!(serde_json::from_str::<Entry>(raw).is_err());
    }
}
