//! One user's journaling session.
//!
//! A [`Session`] is opened from a store, mutated by one action at a time,
//! and saved after every action. An action whose save fails is undone, so
//! the session always matches the last record the store accepted. Reads
//! never touch the store.

use chrono::NaiveDate;
use rand::rngs::StdRng;

use mood_core::{
    Advice, Diary, EntryDraft, EntryReward, FeedOutcome, FortuneDraw, FortuneState, Insights, Mood,
    PetForm, PetState, catalog, draw_fortune, record_entry, weekly_advice,
};

use crate::config::JournalConfig;
use crate::error::{JournalError, JournalResult};
use crate::persist::{PersistedState, StateStore};
use crate::user::UserKey;

/// An open journaling session for a single user.
pub struct Session<S: StateStore> {
    user_name: String,
    key: UserKey,
    diary: Diary,
    total_points: u32,
    pet: PetState,
    fortune: Option<FortuneState>,
    config: JournalConfig,
    rng: StdRng,
    store: S,
}

/// The mutable part of a session, taken before an action so a failed
/// save can put it back.
struct Snapshot {
    diary: Diary,
    total_points: u32,
    pet: PetState,
    fortune: Option<FortuneState>,
}

impl<S: StateStore> Session<S> {
    /// Open a session for `name`, loading its record from `store`.
    ///
    /// A missing record starts a new user. A malformed record is logged
    /// and replaced by fresh state on the next save. Any other load error
    /// is returned.
    pub fn open(
        name: &str,
        store: S,
        config: JournalConfig,
        today: NaiveDate,
    ) -> JournalResult<Self> {
        let key = UserKey::from_display_name(name)?;
        let loaded = match store.load(&key) {
            Ok(found) => found,
            Err(JournalError::Malformed { key, source }) => {
                tracing::warn!(%key, error = %source, "malformed record, starting fresh");
                None
            }
            Err(e) => return Err(e),
        };

        let rng = config.rng();
        let mut session = Self {
            user_name: name.trim().to_string(),
            key,
            diary: Diary::new(),
            total_points: 0,
            pet: PetState::new(today),
            fortune: None,
            config,
            rng,
            store,
        };

        match loaded {
            Some(state) => session.restore(state, today),
            None => tracing::info!(key = %session.key, "new user"),
        }
        session.pet.roll_over(today);
        Ok(session)
    }

    fn restore(&mut self, state: PersistedState, today: NaiveDate) {
        self.diary = state.diary;
        self.total_points = state.total_points;
        if let Some(pet) = state.elf_state {
            self.pet = pet;
        }
        let fortune = (state.fortune_drawn, state.fortune_result, state.fortune_date);
        self.fortune = match fortune {
            (true, Some(result), Some(date)) if date == today => {
                Some(FortuneState { date, result })
            }
            _ => None,
        };
        tracing::debug!(
            key = %self.key,
            entries = self.diary.len(),
            points = self.total_points,
            "loaded record"
        );
    }

    /// Display name as entered (trimmed).
    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Storage key.
    pub fn key(&self) -> &UserKey {
        &self.key
    }

    /// Get the diary.
    pub fn diary(&self) -> &Diary {
        &self.diary
    }

    /// Get the pet.
    pub fn pet(&self) -> &PetState {
        &self.pet
    }

    /// Points earned so far.
    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    /// Get the store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Close the session and hand back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Save an entry and collect its rewards.
    ///
    /// If the store rejects the record, the entry, its points and its
    /// potion are all taken back and the error is returned.
    pub fn save_entry(
        &mut self,
        draft: EntryDraft,
        today: NaiveDate,
    ) -> JournalResult<EntryReward> {
        let before = self.snapshot();
        let date = draft.date;
        let reward = record_entry(
            &mut self.diary,
            &mut self.pet,
            &mut self.total_points,
            draft,
            today,
            &mut self.rng,
        );
        tracing::info!(
            %date,
            new = reward.is_new,
            points = reward.reward_points,
            potion = ?reward.potion,
            "entry saved"
        );
        self.commit(before, today)?;
        Ok(reward)
    }

    /// Feed the pet a potion named by mood symbol, key, or name.
    pub fn feed(&mut self, mood: &str, today: NaiveDate) -> JournalResult<FeedOutcome> {
        let before = self.snapshot();
        let outcome = self.pet.feed_named(mood);
        self.after_feed(before, outcome, today)
    }

    /// Feed the pet one potion of `mood`.
    pub fn feed_mood(&mut self, mood: Mood, today: NaiveDate) -> JournalResult<FeedOutcome> {
        let before = self.snapshot();
        let outcome = self.pet.feed(mood);
        self.after_feed(before, outcome, today)
    }

    fn after_feed(
        &mut self,
        before: Snapshot,
        outcome: FeedOutcome,
        today: NaiveDate,
    ) -> JournalResult<FeedOutcome> {
        if let FeedOutcome::Fed { evolved_now: true } = outcome {
            tracing::info!(form = %self.pet.form(), "pet evolved");
        } else {
            tracing::debug!(?outcome, "feed");
        }
        self.commit(before, today)?;
        Ok(outcome)
    }

    /// Return the pet to an egg. Potion stock is kept.
    pub fn reset_pet(&mut self, today: NaiveDate) -> JournalResult<()> {
        let before = self.snapshot();
        self.pet.reset();
        tracing::info!(key = %self.key, "pet reset");
        self.commit(before, today)
    }

    /// Draw today's fortune, or return the one already drawn.
    pub fn draw_fortune(&mut self, today: NaiveDate) -> JournalResult<FortuneDraw> {
        let before = self.snapshot();
        let draw = draw_fortune(self.fortune.as_ref(), today, &mut self.rng);
        if !draw.already_drawn {
            tracing::info!(tier = %draw.state.result.tier, "fortune drawn");
        }
        self.fortune = Some(draw.state.clone());
        self.commit(before, today)?;
        Ok(draw)
    }

    /// Current streak of consecutive logged days.
    pub fn streak(&self, today: NaiveDate) -> u32 {
        self.diary.streak(today)
    }

    /// Advice based on the last seven days.
    pub fn advice(&self, today: NaiveDate) -> Advice {
        weekly_advice(&self.diary, today)
    }

    /// Summary statistics, if anything has been logged.
    pub fn insights(&self) -> Option<Insights> {
        Insights::from_diary(&self.diary)
    }

    /// The writing prompt for `date`.
    pub fn daily_prompt(&self, date: NaiveDate) -> &'static str {
        catalog::daily_prompt(date)
    }

    /// The pet's current form.
    pub fn pet_form(&self) -> PetForm {
        self.pet.form()
    }

    /// Today's fortune, if drawn.
    pub fn todays_fortune(&self, today: NaiveDate) -> Option<&FortuneState> {
        self.fortune.as_ref().filter(|f| f.is_current(today))
    }

    /// Maybe pick a surprise fact to show after saving.
    pub fn surprise_fact(&mut self) -> Option<&'static str> {
        catalog::surprise_fact(&mut self.rng, self.config.surprise_chance)
    }

    /// The full record as it would be saved today.
    pub fn record(&self, today: NaiveDate) -> PersistedState {
        let fortune = self.todays_fortune(today);
        PersistedState {
            diary: self.diary.clone(),
            total_points: self.total_points,
            user_name: self.user_name.clone(),
            fortune_drawn: fortune.is_some(),
            fortune_result: fortune.map(|f| f.result.clone()),
            fortune_date: Some(fortune.map_or(today, |f| f.date)),
            elf_state: Some(self.pet.clone()),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            diary: self.diary.clone(),
            total_points: self.total_points,
            pet: self.pet.clone(),
            fortune: self.fortune.clone(),
        }
    }

    /// Save the current state, or restore `before` if the store refuses it.
    fn commit(&mut self, before: Snapshot, today: NaiveDate) -> JournalResult<()> {
        let record = self.record(today);
        if let Err(e) = self.store.save(&self.key, &record) {
            tracing::warn!(key = %self.key, error = %e, "save failed, action undone");
            self.diary = before.diary;
            self.total_points = before.total_points;
            self.pet = before.pet;
            self.fortune = before.fortune;
            return Err(e);
        }
        Ok(())
    }
}
