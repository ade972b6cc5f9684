//! The date-ordered diary.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Datelike, NaiveDate};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::entry::Entry;
use crate::error::{CoreError, CoreResult};
use crate::mood::Mood;
use crate::streak::current_streak;

/// Entries keyed by calendar date, serialized as an object keyed by
/// `YYYY-MM-DD`.
///
/// Loading skips entries that cannot be read (an empty or unknown mood, a
/// wrong field type) and keeps the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diary {
    entries: BTreeMap<NaiveDate, Entry>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Readable(Entry),
    Unreadable(IgnoredAny),
}

impl<'de> Deserialize<'de> for Diary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = BTreeMap::<NaiveDate, StoredEntry>::deserialize(deserializer)?;
        let entries = stored
            .into_iter()
            .filter_map(|(date, entry)| match entry {
                StoredEntry::Readable(entry) => Some((date, entry)),
                StoredEntry::Unreadable(_) => None,
            })
            .collect();
        Ok(Self { entries })
    }
}

/// One day in a calendar month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    /// The day.
    pub date: NaiveDate,
    /// Mood logged that day, if any.
    pub mood: Option<Mood>,
}

impl Diary {
    /// Create an empty diary.
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry for a date.
    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.get(&date)
    }

    /// Whether a date has an entry.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Insert or overwrite the entry for a date. Returns true if the date was new.
    pub fn upsert(&mut self, date: NaiveDate, entry: Entry) -> bool {
        self.entries.insert(date, entry).is_none()
    }

    /// All logged dates.
    pub fn dates(&self) -> BTreeSet<NaiveDate> {
        self.entries.keys().copied().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the diary is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &Entry)> {
        self.entries.iter().map(|(d, e)| (*d, e))
    }

    /// Entries with `from <= date < until`.
    pub fn between(
        &self,
        from: NaiveDate,
        until: NaiveDate,
    ) -> impl Iterator<Item = (NaiveDate, &Entry)> {
        let range = if from < until {
            self.entries.range(from..until)
        } else {
            self.entries.range(from..from)
        };
        range.map(|(d, e)| (*d, e))
    }

    /// The earliest logged date.
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.keys().next().copied()
    }

    /// Current logging streak as of `today`.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        current_streak(&self.dates(), today)
    }

    /// Calendar view: one cell per day of the month.
    pub fn month(&self, year: i32, month: u32) -> CoreResult<Vec<MonthCell>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(CoreError::InvalidMonth { year, month })?;
        Ok(first
            .iter_days()
            .take_while(|d| d.month() == month)
            .map(|date| MonthCell {
                date,
                mood: self.get(date).map(|e| e.mood),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(mood: Mood) -> Entry {
        Entry::new(mood, "", "", [])
    }

    #[test]
    fn upsert_reports_new_dates_only() {
        let mut diary = Diary::new();
        assert!(diary.upsert(date(2024, 5, 1), entry(Mood::Calm)));
        assert!(!diary.upsert(date(2024, 5, 1), entry(Mood::Sad)));
        assert_eq!(diary.len(), 1);
        assert_eq!(diary.get(date(2024, 5, 1)).unwrap().mood, Mood::Sad);
    }

    #[test]
    fn serializes_keyed_by_iso_date() {
        let mut diary = Diary::new();
        diary.upsert(date(2024, 5, 1), entry(Mood::Calm));
        let json = serde_json::to_value(&diary).unwrap();
        assert_eq!(json["2024-05-01"]["mood"], "😌");

        let back: Diary = serde_json::from_value(json).unwrap();
        assert_eq!(back, diary);
    }

    #[test]
    fn unreadable_entries_are_skipped_on_load() {
        let raw = r#"{
            "2024-05-01": {"mood": "", "text": "", "response": "", "score": 3},
            "2024-05-02": {"mood": "🙃", "score": 3},
            "2024-05-03": {"mood": "😌", "text": "tea", "response": "", "score": 3}
        }"#;
        let diary: Diary = serde_json::from_str(raw).unwrap();
        assert_eq!(diary.len(), 1);
        assert_eq!(diary.get(date(2024, 5, 3)).unwrap().text, "tea");
        assert!(!diary.contains(date(2024, 5, 1)));
    }

    #[test]
    fn bad_date_keys_still_fail() {
        let raw = r#"{"yesterday": {"mood": "😌", "score": 3}}"#;
        assert!(serde_json::from_str::<Diary>(raw).is_err());
    }

    #[test]
    fn iteration_is_date_ordered() {
        let mut diary = Diary::new();
        diary.upsert(date(2024, 5, 3), entry(Mood::Calm));
        diary.upsert(date(2024, 4, 30), entry(Mood::Happy));
        diary.upsert(date(2024, 5, 1), entry(Mood::Sad));
        let dates: Vec<_> = diary.iter().map(|(d, _)| d).collect();
        let expected = vec![date(2024, 4, 30), date(2024, 5, 1), date(2024, 5, 3)];
        assert_eq!(dates, expected);
        assert_eq!(diary.first_date(), Some(date(2024, 4, 30)));
    }

    #[test]
    fn between_is_half_open() {
        let mut diary = Diary::new();
        for d in 1..=5 {
            diary.upsert(date(2024, 5, d), entry(Mood::Calm));
        }
        let (second, fourth) = (date(2024, 5, 2), date(2024, 5, 4));
        assert_eq!(diary.between(second, fourth).count(), 2);
        assert_eq!(diary.between(fourth, second).count(), 0);
    }

    #[test]
    fn month_view() {
        let mut diary = Diary::new();
        diary.upsert(date(2024, 2, 14), entry(Mood::Excited));
        let cells = diary.month(2024, 2).unwrap();
        assert_eq!(cells.len(), 29);
        assert_eq!(cells[13].mood, Some(Mood::Excited));
        assert!(cells.iter().filter(|c| c.mood.is_some()).count() == 1);
        assert!(diary.month(2024, 13).is_err());
    }
}
