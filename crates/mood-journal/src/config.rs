//! Configuration for a journaling session.

use rand::SeedableRng;
use rand::rngs::StdRng;

use mood_core::catalog::facts::DEFAULT_SURPRISE_CHANCE;

/// Configuration for a session.
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// RNG seed for reproducible reflections and fortune draws. `None`
    /// seeds from the operating system.
    pub seed: Option<u64>,
    /// Probability (0-1) of showing a surprise fact after saving.
    pub surprise_chance: f64,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            seed: None,
            surprise_chance: DEFAULT_SURPRISE_CHANCE,
        }
    }
}

impl JournalConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the surprise fact probability (clamped to 0-1).
    pub fn with_surprise_chance(mut self, chance: f64) -> Self {
        self.surprise_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Build the session's random source.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
