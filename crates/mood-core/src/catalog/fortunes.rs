//! Fortune slips and their weights.
//!
//! Each slip carries an explicit weight; a draw is a cumulative-weight roll
//! over the whole table. Tier weights: Supreme Luck 5, Excellent Luck 15,
//! Good Prospect 15, Moderate Fortune 10, Minor Challenge 5 (out of 50).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Fortune tier, from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FortuneTier {
    /// 🌟 Supreme Luck.
    SupremeLuck,
    /// ✨ Excellent Luck.
    ExcellentLuck,
    /// 🍀 Good Prospect.
    GoodProspect,
    /// 🌤️ Moderate Fortune.
    ModerateFortune,
    /// ⚠️ Minor Challenge.
    MinorChallenge,
}

impl FortuneTier {
    /// All tiers, best first.
    pub const ALL: [FortuneTier; 5] = [
        FortuneTier::SupremeLuck,
        FortuneTier::ExcellentLuck,
        FortuneTier::GoodProspect,
        FortuneTier::ModerateFortune,
        FortuneTier::MinorChallenge,
    ];

    /// Level label as persisted, e.g. `"Supreme Luck"`.
    pub fn level(self) -> &'static str {
        match self {
            Self::SupremeLuck => "Supreme Luck",
            Self::ExcellentLuck => "Excellent Luck",
            Self::GoodProspect => "Good Prospect",
            Self::ModerateFortune => "Moderate Fortune",
            Self::MinorChallenge => "Minor Challenge",
        }
    }

    /// Tier symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::SupremeLuck => "🌟",
            Self::ExcellentLuck => "✨",
            Self::GoodProspect => "🍀",
            Self::ModerateFortune => "🌤️",
            Self::MinorChallenge => "⚠️",
        }
    }

    /// Parse a tier from its level label.
    pub fn from_level(level: &str) -> CoreResult<FortuneTier> {
        Self::ALL
            .into_iter()
            .find(|t| t.level() == level.trim())
            .ok_or_else(|| CoreError::UnknownFortuneLevel(level.to_string()))
    }

    /// Combined weight of every slip in this tier.
    pub fn weight(self) -> u32 {
        FORTUNE_SLIPS
            .iter()
            .filter(|s| s.tier == self)
            .map(|s| s.weight)
            .sum()
    }
}

impl std::fmt::Display for FortuneTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.level(), self.symbol())
    }
}

/// One fortune slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneSlip {
    /// Tier of the slip.
    pub tier: FortuneTier,
    /// Slip text.
    pub text: &'static str,
    /// Relative draw weight.
    pub weight: u32,
}

const fn slip(tier: FortuneTier, weight: u32, text: &'static str) -> FortuneSlip {
    FortuneSlip { tier, text, weight }
}

use FortuneTier::{ExcellentLuck, GoodProspect, MinorChallenge, ModerateFortune, SupremeLuck};

/// The weighted slip table.
pub const FORTUNE_SLIPS: &[FortuneSlip] = &[
    slip(
        SupremeLuck,
        2,
        "A day of profound clarity and happiness awaits. Trust your highest vision; your energy is magnetic today.",
    ),
    slip(
        SupremeLuck,
        1,
        "All relationships are blessed today. Reach out and share your good fortune; it will return tenfold.",
    ),
    slip(
        SupremeLuck,
        1,
        "An obstacle you faced yesterday dissolves today. Unexpected success finds you when you stay open.",
    ),
    slip(
        SupremeLuck,
        1,
        "Inner peace is your greatest asset. Use this calm to make powerful, confident decisions.",
    ),
    slip(
        ExcellentLuck,
        3,
        "Your mind is sharp and ideas flow. Write down new goals; you have the power to achieve them.",
    ),
    slip(
        ExcellentLuck,
        3,
        "Take a risk today, especially in creative endeavors. Joy follows bold action.",
    ),
    slip(
        ExcellentLuck,
        3,
        "Unexpected kindness comes from a stranger or colleague. Pay it forward and brighten someone else's day.",
    ),
    slip(
        ExcellentLuck,
        3,
        "A lingering doubt is resolved easily. Feel lighter and move forward with purpose.",
    ),
    slip(
        ExcellentLuck,
        3,
        "The path to self-improvement is wide open. Commit to a healthy habit today.",
    ),
    slip(
        GoodProspect,
        3,
        "A feeling of balance settles in. Trust the rhythm of your day and avoid unnecessary rushing.",
    ),
    slip(
        GoodProspect,
        3,
        "Someone needs your support. Offering a listening ear will deepen your connection.",
    ),
    slip(
        GoodProspect,
        3,
        "Your emotional well-being requires gentle attention. Focus on rest and simple pleasures.",
    ),
    slip(
        GoodProspect,
        3,
        "A small personal victory is on the horizon. Acknowledge and reward your efforts.",
    ),
    slip(
        GoodProspect,
        3,
        "Change is coming, but it is manageable. Prepare your mind for gentle adjustments.",
    ),
    slip(
        ModerateFortune,
        2,
        "It is a day for careful planning. Avoid spontaneity and stick to your schedule for best results.",
    ),
    slip(
        ModerateFortune,
        2,
        "Energy levels are moderate. Conserve your efforts for what truly matters by saying 'no' when needed.",
    ),
    slip(
        ModerateFortune,
        2,
        "A minor misunderstanding may occur. Approach conversations with patience and seek clarity.",
    ),
    slip(
        ModerateFortune,
        2,
        "Don't dwell on perfection. Good enough is perfect for today; accept progress over flawless execution.",
    ),
    slip(
        ModerateFortune,
        2,
        "Neutral energy surrounds you. Use this quiet day for thoughtful reflection in your journal.",
    ),
    slip(
        MinorChallenge,
        1,
        "Frustration is possible. Use this as a signal to step away and seek immediate stress relief.",
    ),
    slip(
        MinorChallenge,
        1,
        "A feeling of heaviness may arise. Be extra gentle with yourself and prioritize basic self-care.",
    ),
    slip(
        MinorChallenge,
        1,
        "Be mindful of unnecessary spending or overcommitment. Your boundaries need protection today.",
    ),
    slip(
        MinorChallenge,
        1,
        "Doubt may creep in. Remember your core strengths and seek external encouragement if needed.",
    ),
    slip(
        MinorChallenge,
        1,
        "Communication requires extra effort. Write down your thoughts before speaking to avoid conflict.",
    ),
];

/// Sum of all slip weights.
pub fn total_weight() -> u32 {
    FORTUNE_SLIPS.iter().map(|s| s.weight).sum()
}

/// Draw one slip, weighted.
pub fn pick_slip<R: Rng>(rng: &mut R) -> &'static FortuneSlip {
    let roll = rng.random_range(0..total_weight());
    let mut current = 0;
    for slip in FORTUNE_SLIPS {
        current += slip.weight;
        if roll < current {
            return slip;
        }
    }
    &FORTUNE_SLIPS[FORTUNE_SLIPS.len() - 1]
}
