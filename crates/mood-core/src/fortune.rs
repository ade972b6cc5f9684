//! The once-per-day fortune gate.
//!
//! A user may draw one fortune per calendar day. A stored fortune whose date
//! is not today counts as absent; drawing again on the same day returns the
//! stored result unchanged.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use crate::catalog::fortunes::FortuneTier;
use crate::catalog::fortunes::pick_slip;
use crate::error::CoreError;

/// A drawn fortune, persisted as `[level, symbol, description]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    into = "(String, String, String)",
    try_from = "(String, String, String)"
)]
pub struct FortuneResult {
    /// The tier drawn.
    pub tier: FortuneTier,
    /// The slip text.
    pub description: String,
}

impl FortuneResult {
    /// The tier's symbol.
    pub fn symbol(&self) -> &'static str {
        self.tier.symbol()
    }
}

impl From<FortuneResult> for (String, String, String) {
    fn from(result: FortuneResult) -> Self {
        (
            result.tier.level().to_string(),
            result.tier.symbol().to_string(),
            result.description,
        )
    }
}

impl TryFrom<(String, String, String)> for FortuneResult {
    type Error = CoreError;

    fn try_from(
        (level, _symbol, description): (String, String, String),
    ) -> Result<Self, Self::Error> {
        Ok(Self {
            tier: FortuneTier::from_level(&level)?,
            description,
        })
    }
}

impl std::fmt::Display for FortuneResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.tier, self.description)
    }
}

/// The fortune drawn on a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FortuneState {
    /// The day the result applies to.
    pub date: NaiveDate,
    /// The drawn result.
    pub result: FortuneResult,
}

impl FortuneState {
    /// Whether this fortune is today's.
    pub fn is_current(&self, today: NaiveDate) -> bool {
        self.date == today
    }
}

/// Outcome of a draw attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneDraw {
    /// Today's fortune.
    pub state: FortuneState,
    /// True when today's fortune had already been drawn.
    pub already_drawn: bool,
}

/// Draw today's fortune, or return it unchanged if it was already drawn.
pub fn draw_fortune<R: Rng>(
    current: Option<&FortuneState>,
    today: NaiveDate,
    rng: &mut R,
) -> FortuneDraw {
    if let Some(state) = current.filter(|s| s.is_current(today)) {
        return FortuneDraw {
            state: state.clone(),
            already_drawn: true,
        };
    }

    let slip = pick_slip(rng);
    FortuneDraw {
        state: FortuneState {
            date: today,
            result: FortuneResult {
                tier: slip.tier,
                description: slip.text.to_string(),
            },
        },
        already_drawn: false,
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

    #[test]
    fn first_draw_is_fresh() {
        let mut rng = StdRng::seed_from_u64(7);
        let draw = draw_fortune(None, day(1), &mut rng);
        assert!(!draw.already_drawn);
        assert_eq!(draw.state.date, day(1));
    }

    #[test]
    fn second_draw_same_day_is_identical() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = draw_fortune(None, day(1), &mut rng);
        for _ in 0..10 {
            let again = draw_fortune(Some(&first.state), day(1), &mut rng);
            assert!(again.already_drawn);
            assert_eq!(again.state, first.state);
        }
    }

    #[test]
    fn stale_fortune_is_redrawn() {
        let mut rng = StdRng::seed_from_u64(7);
        let first = draw_fortune(None, day(1), &mut rng);
        let next = draw_fortune(Some(&first.state), day(2), &mut rng);
        assert!(!next.already_drawn);
        assert_eq!(next.state.date, day(2));
    }

    #[test]
    fn result_persists_as_triple() {
        let result = FortuneResult {
            tier: FortuneTier::GoodProspect,
            description: "Trust the rhythm.".to_string(),
        };
        let json = serde_json::to_value(&result).unwrap();
        let expected = serde_json::json!(["Good Prospect", "🍀", "Trust the rhythm."]);
        assert_eq!(json, expected);
        let back: FortuneResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn unknown_level_fails_to_load() {
        let raw = r#"["Mega Luck", "🎰", "??"]"#;
        assert!(serde_json::from_str::<FortuneResult>(raw).is_err());
    }
}
