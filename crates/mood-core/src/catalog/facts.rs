//! Surprise facts occasionally shown after saving an entry.

use rand::Rng;

/// Fun facts and riddles.
pub const SURPRISE_FACTS: &[&str] = &[
    "Did you know a group of flamingos is called a 'flamboyance'? Stay flamboyant! 💖",
    "Fun Fact: Honey never spoils. Keep your good memories preserved like honey! 🍯",
    "Quick Riddle: What has to be broken before you can use it? An egg! Break those barriers!🥚",
    "A moment of wonder: There are more trees on Earth than stars in the Milky Way. Keep growing! 🌳",
    "Your lucky number today is 7! May your day be seven times brighter! ✨",
];

/// Default probability of showing a surprise fact.
pub const DEFAULT_SURPRISE_CHANCE: f64 = 0.25;

/// With probability `chance`, pick one surprise fact.
pub fn surprise_fact<R: Rng>(rng: &mut R, chance: f64) -> Option<&'static str> {
    if !rng.random_bool(chance.clamp(0.0, 1.0)) {
        return None;
    }
    Some(SURPRISE_FACTS[rng.random_range(0..SURPRISE_FACTS.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn never_and_always() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert!(surprise_fact(&mut rng, 0.0).is_none());
            assert!(surprise_fact(&mut rng, 1.0).is_some());
        }
    }

    #[test]
    fn default_chance_shows_some_but_not_all() {
        let mut rng = StdRng::seed_from_u64(9);
        let chance = DEFAULT_SURPRISE_CHANCE;
        let shown = (0..1000)
            .filter(|_| surprise_fact(&mut rng, chance).is_some())
            .count();
        assert!(shown > 150 && shown < 350, "shown {shown} of 1000");
    }
}
