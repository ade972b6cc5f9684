//! Weekly mood advice.
//!
//! Looks at the seven days before today (today itself excluded) and turns
//! the average entry score into one short piece of advice.

use chrono::{Days, NaiveDate};

use crate::diary::Diary;
use crate::mood::{Mood, MoodTally};

/// Days looked back from today.
pub const ADVICE_WINDOW_DAYS: u64 = 7;

/// Average at or below which recent moods count as low.
pub const LOW_AVERAGE: f64 = 2.5;

/// Average at or above which recent moods count as great.
pub const HIGH_AVERAGE: f64 = 4.0;

/// Scores at or below this make a mood "low" when looking for a pattern.
const LOW_SCORE: u8 = 2;

/// Advice derived from recent entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advice {
    /// The diary is empty.
    FirstEntry,
    /// No entries in the last week.
    NeedMoreData,
    /// Mostly sad or anxious lately.
    Mindfulness,
    /// Mostly tired lately.
    MoveMore,
    /// Mostly angry lately.
    Gratitude,
    /// Low average without a dominant low mood.
    ReachOut,
    /// High average.
    ShareJoy,
    /// Somewhere in between.
    Balanced,
}

impl Advice {
    /// The user-facing message.
    pub fn message(self) -> &'static str {
        match self {
            Self::FirstEntry => {
                "👋 Time to start your first entry and unlock personalized advice!"
            }
            Self::NeedMoreData => "🤔 Need a week of data for personalized advice. Keep logging!",
            Self::Mindfulness => {
                "😥 Recent Mood Alert: You've often felt sad/anxious. Challenge: Try a 10-minute mindfulness exercise today."
            }
            Self::MoveMore => {
                "😴 Recent Mood Alert: You've often felt tired. Challenge: Aim for 30 minutes of light physical activity today."
            }
            Self::Gratitude => {
                "😡 Recent Mood Alert: You've often felt angry. Challenge: Write down 3 things you are grateful for before bed."
            }
            Self::ReachOut => {
                "📉 Recent Mood Alert: Your average mood score is low. Challenge: Reach out to a friend or loved one today."
            }
            Self::ShareJoy => {
                "✨ Great Job! Your recent mood trend is excellent! Advice: Share your joy—compliment someone today!"
            }
            Self::Balanced => {
                "⚖️ Your mood is balanced. Advice: Keep exploring your activities! Try adding one new tag today."
            }
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Advice from the week before `today`.
pub fn weekly_advice(diary: &Diary, today: NaiveDate) -> Advice {
    if diary.is_empty() {
        return Advice::FirstEntry;
    }

    let from = today
        .checked_sub_days(Days::new(ADVICE_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN);
    let recent: Vec<_> = diary.between(from, today).map(|(_, e)| e).collect();
    if recent.is_empty() {
        return Advice::NeedMoreData;
    }

    let sum: u32 = recent.iter().map(|e| u32::from(e.score)).sum();
    let average = f64::from(sum) / recent.len() as f64;

    if average <= LOW_AVERAGE {
        let mut low = MoodTally::zeroed();
        for entry in recent.iter().filter(|e| e.score <= LOW_SCORE) {
            low.add_one(entry.mood);
        }
        match low.max_mood() {
            Some(Mood::Sad | Mood::Anxious) => Advice::Mindfulness,
            Some(Mood::Tired) => Advice::MoveMore,
            Some(Mood::Angry) => Advice::Gratitude,
            _ => Advice::ReachOut,
        }
    } else if average >= HIGH_AVERAGE {
        Advice::ShareJoy
    } else {
        Advice::Balanced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diary::Entry;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn diary_with(moods: &[(u64, Mood)]) -> Diary {
        let mut diary = Diary::new();
        for (ago, mood) in moods {
            diary.upsert(today() - Days::new(*ago), Entry::new(*mood, "", "", []));
        }
        diary
    }

    #[test]
    fn empty_diary() {
        assert_eq!(weekly_advice(&Diary::new(), today()), Advice::FirstEntry);
    }

    #[test]
    fn today_and_old_entries_are_outside_the_window() {
        let diary = diary_with(&[(0, Mood::Sad), (8, Mood::Sad)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::NeedMoreData);
    }

    #[test]
    fn seven_days_ago_is_inside_the_window() {
        let diary = diary_with(&[(7, Mood::Happy)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::ShareJoy);
    }

    #[test]
    fn low_moods_pick_a_challenge() {
        let diary = diary_with(&[(1, Mood::Tired), (2, Mood::Tired), (3, Mood::Sad)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::MoveMore);

        let diary = diary_with(&[(1, Mood::Angry), (2, Mood::Angry), (3, Mood::Calm)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::Gratitude);

        let diary = diary_with(&[(1, Mood::Anxious), (2, Mood::Sad), (3, Mood::Calm)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::Mindfulness);
    }

    #[test]
    fn tie_between_low_moods_uses_canonical_order() {
        // Sad precedes Tired in canonical order.
        let diary = diary_with(&[(1, Mood::Tired), (2, Mood::Sad)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::Mindfulness);
    }

    #[test]
    fn middle_average_is_balanced() {
        let diary = diary_with(&[(1, Mood::Calm), (2, Mood::Excited)]);
        assert_eq!(weekly_advice(&diary, today()), Advice::Balanced);
    }

    #[test]
    fn messages_are_distinct() {
        let all = [
            Advice::FirstEntry,
            Advice::NeedMoreData,
            Advice::Mindfulness,
            Advice::MoveMore,
            Advice::Gratitude,
            Advice::ReachOut,
            Advice::ShareJoy,
            Advice::Balanced,
        ];
        let mut messages: Vec<_> = all.iter().map(|a| a.message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), all.len());
    }
}
