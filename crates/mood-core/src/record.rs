//! Recording a journal entry and its rewards.

use chrono::NaiveDate;
use rand::Rng;

use crate::catalog::{ActivityTag, reflect};
use crate::diary::{Diary, Entry};
use crate::mood::Mood;
use crate::pet::{PetState, PotionGrant};

/// Points awarded the first time a date is logged.
pub const POINTS_PER_ENTRY: u32 = 10;

/// What the user submitted for a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    /// The date being written (not necessarily today).
    pub date: NaiveDate,
    /// Chosen mood.
    pub mood: Mood,
    /// Entry text.
    pub text: String,
    /// Chosen activity tags.
    pub tags: Vec<ActivityTag>,
}

impl EntryDraft {
    /// A draft with no text and no tags.
    pub fn new(date: NaiveDate, mood: Mood) -> Self {
        Self {
            date,
            mood,
            text: String::new(),
            tags: Vec::new(),
        }
    }

    /// Set the text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the tags.
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = ActivityTag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }
}

/// Rewards and feedback from recording an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryReward {
    /// Points earned (10 for a new date, 0 for an edit).
    pub reward_points: u32,
    /// Potion grant outcome.
    pub potion: PotionGrant,
    /// The reflection stored with the entry.
    pub response: String,
    /// Whether the date had no entry before.
    pub is_new: bool,
}

/// Write `draft` into the diary, award points, and attempt a potion grant.
///
/// The entry is always overwritten. Points are only awarded for a date not
/// yet in the diary. The potion grant is gated by *today's* counter, even
/// when the draft edits a past date.
pub fn record_entry<R: Rng>(
    diary: &mut Diary,
    pet: &mut PetState,
    total_points: &mut u32,
    draft: EntryDraft,
    today: NaiveDate,
    rng: &mut R,
) -> EntryReward {
    let response = reflect(&draft.text, rng);
    let potion = pet.grant_potion(draft.mood, today);

    let entry = Entry::new(draft.mood, draft.text, response.clone(), draft.tags);
    let is_new = diary.upsert(draft.date, entry);

    let reward_points = if is_new { POINTS_PER_ENTRY } else { 0 };
    *total_points = total_points.saturating_add(reward_points);

    EntryReward {
        reward_points,
        potion,
        response,
        is_new,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    struct Fixture {
        diary: Diary,
        pet: PetState,
        points: u32,
        rng: StdRng,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                diary: Diary::new(),
                pet: PetState::new(day(10)),
                points: 0,
                rng: StdRng::seed_from_u64(5),
            }
        }

        fn record(&mut self, draft: EntryDraft, today: NaiveDate) -> EntryReward {
            record_entry(
                &mut self.diary,
                &mut self.pet,
                &mut self.points,
                draft,
                today,
                &mut self.rng,
            )
        }
    }

    #[test]
    fn new_date_earns_points_and_a_potion() {
        let mut f = Fixture::new();
        let draft = EntryDraft::new(day(10), Mood::Happy).with_text("so happy");
        let reward = f.record(draft, day(10));
        assert_eq!(reward.reward_points, 10);
        assert!(reward.is_new);
        assert_eq!(reward.potion, PotionGrant::Granted(Mood::Happy));
        assert_eq!(f.points, 10);
        assert_eq!(f.pet.potions(Mood::Happy), 6);
        assert!(reward.response.starts_with("Yay!"));
    }

    #[test]
    fn editing_earns_no_points_but_still_grants() {
        let mut f = Fixture::new();
        f.record(EntryDraft::new(day(10), Mood::Happy), day(10));
        let reward = f.record(
            EntryDraft::new(day(10), Mood::Calm)
                .with_text("calm evening")
                .with_tags([ActivityTag::Rest]),
            day(10),
        );
        assert_eq!(reward.reward_points, 0);
        assert!(!reward.is_new);
        assert_eq!(reward.potion, PotionGrant::Granted(Mood::Calm));
        assert_eq!(f.points, 10);

        let entry = f.diary.get(day(10)).unwrap();
        assert_eq!(entry.mood, Mood::Calm);
        assert_eq!(entry.score, 3);
        assert_eq!(entry.text, "calm evening");
        assert!(entry.tags.contains(&ActivityTag::Rest));
        assert_eq!(entry.response, reward.response);
    }

    #[test]
    fn past_dates_use_todays_cap() {
        let mut f = Fixture::new();
        for d in 1..=5 {
            let reward = f.record(EntryDraft::new(day(d), Mood::Sad), day(10));
            assert!(reward.potion.is_granted());
        }
        let reward = f.record(EntryDraft::new(day(6), Mood::Sad), day(10));
        assert_eq!(reward.potion, PotionGrant::DailyCapReached);
        assert_eq!(reward.reward_points, 10);
        assert_eq!(f.points, 60);
        assert_eq!(f.pet.potions(Mood::Sad), 10);
    }

    #[test]
    fn grant_rolls_over_before_checking_cap() {
        let mut f = Fixture::new();
        f.pet.daily_potion_count = 5;
        let reward = f.record(EntryDraft::new(day(11), Mood::Tired), day(11));
        assert!(reward.potion.is_granted());
        assert_eq!(f.pet.daily_potion_count, 1);
    }
}
