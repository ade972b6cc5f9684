use colored::Colorize;
use mood_core::FeedOutcome;

use super::Context;

pub fn run(ctx: &Context, mood: &str) -> Result<(), String> {
    let mut session = ctx.open()?;
    let outcome = session.feed(mood, ctx.today).map_err(|e| e.to_string())?;
    let pet = session.pet();

    match outcome {
        FeedOutcome::Fed { evolved_now: true } => {
            println!("  {}", "Your pet has evolved!".green().bold());
            println!("  It became a {} elf.", session.pet_form());
        }
        FeedOutcome::Fed { evolved_now: false } => println!(
            "  Fed! {}/{} feeds ({} to go)",
            pet.total_feeds,
            pet.evolution_threshold,
            pet.feeds_remaining()
        ),
        FeedOutcome::OutOfStock => {
            println!("  {}", "No potions of that mood left.".yellow())
        }
        FeedOutcome::AlreadyEvolved => println!(
            "  Your {} elf is fully grown. Use reset-pet to raise a new one.",
            session.pet_form()
        ),
        FeedOutcome::UnknownMood => return Err(format!("unknown mood: \"{mood}\"")),
    }

    Ok(())
}
