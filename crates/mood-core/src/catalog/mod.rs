//! Static content tables.
//!
//! Everything here is immutable data plus pure lookups. The engine indexes
//! into these tables; presentation layers decide how to show the text.

pub mod facts;
pub mod fortunes;
pub mod prompts;
pub mod responses;
pub mod tags;

pub use facts::{SURPRISE_FACTS, surprise_fact};
pub use fortunes::{FORTUNE_SLIPS, FortuneSlip, FortuneTier, pick_slip};
pub use prompts::{DAILY_PROMPTS, daily_prompt, prompt_index};
pub use responses::{EMOTION_RESPONSES, GENERAL_RESPONSES, SAD_JOKES, reflect};
pub use tags::ActivityTag;
