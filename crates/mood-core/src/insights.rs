//! Aggregate statistics over the whole diary.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::catalog::ActivityTag;
use crate::diary::Diary;
use crate::mood::{Mood, MoodTally};

/// How many tags the rankings keep.
pub const TOP_TAGS: usize = 3;

/// Diary-wide statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insights {
    /// Earliest logged date.
    pub first_entry: NaiveDate,
    /// Number of logged days.
    pub total_entries: usize,
    /// Most frequent mood (ties go to canonical order).
    pub top_mood: Mood,
    /// Most frequent tags overall, with counts.
    pub top_tags: Vec<(ActivityTag, usize)>,
    /// Most frequent tags on Happy days, with counts.
    pub happy_tags: Vec<(ActivityTag, usize)>,
}

impl Insights {
    /// Compute insights; `None` for an empty diary.
    pub fn from_diary(diary: &Diary) -> Option<Insights> {
        let first_entry = diary.first_date()?;

        let mut moods = MoodTally::zeroed();
        let mut all_tags: BTreeMap<ActivityTag, usize> = BTreeMap::new();
        let mut happy_tags: BTreeMap<ActivityTag, usize> = BTreeMap::new();
        for (_, entry) in diary.iter() {
            moods.add_one(entry.mood);
            for tag in &entry.tags {
                *all_tags.entry(*tag).or_default() += 1;
                if entry.mood == Mood::Happy {
                    *happy_tags.entry(*tag).or_default() += 1;
                }
            }
        }

        Some(Insights {
            first_entry,
            total_entries: diary.len(),
            top_mood: moods.max_mood()?,
            top_tags: rank(all_tags),
            happy_tags: rank(happy_tags),
        })
    }
}

/// Sort by count descending, then by tag order; keep the top few.
fn rank(counts: BTreeMap<ActivityTag, usize>) -> Vec<(ActivityTag, usize)> {
    let mut ranked: Vec<_> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.truncate(TOP_TAGS);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::Entry;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn empty_diary_has_no_insights() {
        assert!(Insights::from_diary(&Diary::new()).is_none());
    }

    #[test]
    fn aggregates() {
        use ActivityTag::*;
        let mut diary = Diary::new();
        diary.upsert(date(3), Entry::new(Mood::Happy, "", "", [Family, Food]));
        diary.upsert(date(4), Entry::new(Mood::Happy, "", "", [Family, Nature]));
        diary.upsert(date(5), Entry::new(Mood::Tired, "", "", [Work, Food]));
        diary.upsert(date(6), Entry::new(Mood::Tired, "", "", [Work, Money]));

        let insights = Insights::from_diary(&diary).unwrap();
        assert_eq!(insights.first_entry, date(3));
        assert_eq!(insights.total_entries, 4);
        assert_eq!(insights.top_mood, Mood::Happy);
        assert_eq!(insights.top_tags, vec![(Work, 2), (Food, 2), (Family, 2)]);
        let happy = vec![(Family, 2), (Food, 1), (Nature, 1)];
        assert_eq!(insights.happy_tags, happy);
    }
}
