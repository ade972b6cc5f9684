//! Canned reflections returned when an entry is saved.
//!
//! A reflection is derived from the entry text alone: the first keyword in
//! [`EMOTION_RESPONSES`] found in the lowercased text decides the reply,
//! otherwise one of [`GENERAL_RESPONSES`] is picked at random.

use rand::Rng;

/// A keyword-triggered reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionResponse {
    /// Lowercase keyword searched for as a substring.
    pub keyword: &'static str,
    /// Reply text.
    pub reply: &'static str,
    /// Whether a cheer-up joke is appended to the reply.
    pub with_joke: bool,
}

const fn response(keyword: &'static str, reply: &'static str) -> EmotionResponse {
    EmotionResponse {
        keyword,
        reply,
        with_joke: false,
    }
}

/// Keyword replies in priority order.
pub const EMOTION_RESPONSES: &[EmotionResponse] = &[
    response(
        "tired",
        "You sound tired 😴. Rest is productive too — take time to recharge.",
    ),
    response(
        "bored",
        "Boredom might mean your heart craves something new 🎨. Try doing something creative today!",
    ),
    response(
        "calm",
        "That’s wonderful 🌿. Calmness is peace speaking softly to your soul.",
    ),
    response(
        "guilty",
        "Guilt shows you care 🌱. Reflect gently and forgive yourself.",
    ),
    response(
        "anxious",
        "Anxiety can be heavy 😥. Breathe slowly — you’re safe and doing your best.",
    ),
    response(
        "happy",
        "Yay! So happy for you! 😄🎈 Let your joy shine and share your smile today!",
    ),
    EmotionResponse {
        keyword: "sad",
        reply: "It’s okay to feel sad 💧. Emotions flow and fade — here’s a little cheer-up joke for you:",
        with_joke: true,
    },
    response(
        "lonely",
        "Loneliness is heavy 🫶. You’re not alone — I’m here listening.",
    ),
    response(
        "angry",
        "It’s alright to feel upset 😔. Let it out — expression is healing.",
    ),
];

/// Jokes appended to the "sad" reply.
pub const SAD_JOKES: &[&str] = &[
    "Why did the scarecrow win an award? Because he was outstanding in his field 🌾",
    "I told my computer I felt sad — it gave me a byte of comfort 💻",
    "Did you hear about the depressed coffee? It got mugged ☕",
];

/// Replies used when no keyword matches.
pub const GENERAL_RESPONSES: &[&str] = &[
    "Thank you for sharing your entry ✍️. Remember, small steps lead to big changes.",
    "Your feelings are valid. Take a moment to focus on your breath and find peace. 🌬️",
    "It takes courage to write down your thoughts. We're here to listen to your journey! 🫂",
    "Keep up the habit of reflection! Every day is a new story waiting to unfold. 🌿",
    "Well done on making an entry today! You are prioritizing your well-being. 😊",
];

/// The keyword reply matching `text`, if any.
pub fn matching_response(text: &str) -> Option<&'static EmotionResponse> {
    let lower = text.to_lowercase();
    EMOTION_RESPONSES.iter().find(|r| lower.contains(r.keyword))
}

/// Compute the reflection for an entry's text.
pub fn reflect<R: Rng>(text: &str, rng: &mut R) -> String {
    match matching_response(text) {
        Some(r) if r.with_joke => {
            let joke = SAD_JOKES[rng.random_range(0..SAD_JOKES.len())];
            format!("{}\n\n**{joke}**", r.reply)
        }
        Some(r) => r.reply.to_string(),
        None => GENERAL_RESPONSES[rng.random_range(0..GENERAL_RESPONSES.len())].to_string(),
    }
}
