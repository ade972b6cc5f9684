//! Pet progression: potion income, feeding, evolution, and resets.
//!
//! Journaling earns potions (at most [`MAX_DAILY_POTIONS`] per day across
//! all moods). Feeding a potion raises that mood's feed count; once the
//! total reaches [`EVOLUTION_THRESHOLD`] the pet evolves into the form of
//! its most-fed mood. Evolution is sticky: feeding stops until an explicit
//! [`PetState::reset`], which clears feed progress but keeps every potion.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::mood::{Mood, MoodTally};

/// Total feeds needed to evolve.
pub const EVOLUTION_THRESHOLD: u32 = 30;

/// Potions of each mood a new pet starts with.
pub const INITIAL_POTIONS: u32 = 5;

/// Potions that can be earned per calendar day, across all moods.
pub const MAX_DAILY_POTIONS: u32 = 5;

/// Fallback evolved form when evolution is flagged but nothing was fed.
pub const FALLBACK_FORM: Mood = Mood::Happy;

/// Result of trying to grant a potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotionGrant {
    /// One potion of this mood was added.
    Granted(Mood),
    /// Today's grant cap is already used up.
    DailyCapReached,
    /// The mood symbol did not name a known mood.
    UnknownMood,
}

impl PotionGrant {
    /// Whether a potion was granted.
    pub fn is_granted(self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// The granted mood, if any.
    pub fn mood(self) -> Option<Mood> {
        match self {
            Self::Granted(mood) => Some(mood),
            _ => None,
        }
    }
}

/// Result of trying to feed the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// One potion was consumed.
    Fed {
        /// True only on the feed that triggered evolution.
        evolved_now: bool,
    },
    /// No potion of that mood is left.
    OutOfStock,
    /// The pet has evolved; feeding is disabled until a reset.
    AlreadyEvolved,
    /// The name did not match a known mood.
    UnknownMood,
}

impl FeedOutcome {
    /// Whether a potion was consumed.
    pub fn is_fed(self) -> bool {
        matches!(self, Self::Fed { .. })
    }
}

/// What the pet currently looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PetForm {
    /// Not evolved yet.
    Egg,
    /// Evolved into the form of a mood.
    Evolved(Mood),
}

impl std::fmt::Display for PetForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Egg => write!(f, "EGG"),
            Self::Evolved(mood) => write!(f, "{mood}"),
        }
    }
}

/// Per-user pet state, persisted as `elf_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PetState {
    /// Potions on hand per mood.
    pub available_potions: MoodTally,
    /// Times fed per mood.
    pub emotion_counts: MoodTally,
    /// Total feeds; always equals the sum of `emotion_counts`.
    pub total_feeds: u32,
    /// Feeds needed to evolve.
    #[serde(default = "default_threshold")]
    pub evolution_threshold: u32,
    /// Whether the pet has evolved.
    pub evolved: bool,
    /// Potions granted on `last_potion_date`.
    #[serde(default)]
    pub daily_potion_count: u32,
    /// Day the grant counter was last checked.
    #[serde(default = "long_ago")]
    pub last_potion_date: NaiveDate,
}

fn default_threshold() -> u32 {
    EVOLUTION_THRESHOLD
}

fn long_ago() -> NaiveDate {
    NaiveDate::MIN
}

impl PetState {
    /// A fresh pet: an egg with [`INITIAL_POTIONS`] of every mood.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            available_potions: MoodTally::filled(INITIAL_POTIONS),
            emotion_counts: MoodTally::zeroed(),
            total_feeds: 0,
            evolution_threshold: EVOLUTION_THRESHOLD,
            evolved: false,
            daily_potion_count: 0,
            last_potion_date: today,
        }
    }

    /// Reset the daily grant counter if `today` is a new day. Idempotent.
    pub fn roll_over(&mut self, today: NaiveDate) {
        if self.last_potion_date != today {
            self.daily_potion_count = 0;
            self.last_potion_date = today;
        }
    }

    /// Grant one potion of `mood`, subject to the shared daily cap.
    pub fn grant_potion(&mut self, mood: Mood, today: NaiveDate) -> PotionGrant {
        self.roll_over(today);
        if self.daily_potion_count >= MAX_DAILY_POTIONS {
            return PotionGrant::DailyCapReached;
        }
        self.available_potions.add_one(mood);
        self.daily_potion_count += 1;
        PotionGrant::Granted(mood)
    }

    /// Grant by mood symbol. Unknown symbols grant nothing, whether or not
    /// today's cap is used up.
    pub fn grant_potion_symbol(&mut self, symbol: &str, today: NaiveDate) -> PotionGrant {
        self.roll_over(today);
        match Mood::from_symbol(symbol) {
            Some(mood) => self.grant_potion(mood, today),
            None => PotionGrant::UnknownMood,
        }
    }

    /// Feed one potion of `mood`.
    pub fn feed(&mut self, mood: Mood) -> FeedOutcome {
        if self.evolved {
            return FeedOutcome::AlreadyEvolved;
        }
        if !self.available_potions.take_one(mood) {
            return FeedOutcome::OutOfStock;
        }
        self.emotion_counts.add_one(mood);
        self.total_feeds += 1;

        let evolved_now = self.total_feeds >= self.evolution_threshold;
        if evolved_now {
            self.evolved = true;
        }
        FeedOutcome::Fed { evolved_now }
    }

    /// Feed by mood name, key, or symbol. Unknown names feed nothing.
    pub fn feed_named(&mut self, name: &str) -> FeedOutcome {
        if self.evolved {
            return FeedOutcome::AlreadyEvolved;
        }
        match Mood::parse(name) {
            Some(mood) => self.feed(mood),
            None => FeedOutcome::UnknownMood,
        }
    }

    /// The current form: an egg until evolved, then the most-fed mood.
    pub fn form(&self) -> PetForm {
        if !self.evolved {
            return PetForm::Egg;
        }
        PetForm::Evolved(self.emotion_counts.max_mood().unwrap_or(FALLBACK_FORM))
    }

    /// Clear feed progress and evolution. Potions and the daily grant
    /// counter are untouched.
    pub fn reset(&mut self) {
        self.emotion_counts = MoodTally::zeroed();
        self.total_feeds = 0;
        self.evolved = false;
    }

    /// Potions on hand for one mood.
    pub fn potions(&self, mood: Mood) -> u32 {
        self.available_potions.get(mood)
    }

    /// Feeds left before evolution (0 once reached).
    pub fn feeds_remaining(&self) -> u32 {
        self.evolution_threshold.saturating_sub(self.total_feeds)
    }

    /// Evolution progress in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        if self.evolution_threshold == 0 {
            return 1.0;
        }
        (f64::from(self.total_feeds) / f64::from(self.evolution_threshold)).min(1.0)
    }

    /// Potions still grantable today (after rollover).
    pub fn daily_potions_left(&self, today: NaiveDate) -> u32 {
        if self.last_potion_date != today {
            return MAX_DAILY_POTIONS;
        }
        MAX_DAILY_POTIONS.saturating_sub(self.daily_potion_count)
    }
}
