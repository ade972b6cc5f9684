use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use mood_core::{Mood, PetForm, pet::MAX_DAILY_POTIONS};

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let session = ctx.open()?;
    let today = ctx.today;
    let pet = session.pet();

    println!("  {} {}", "Moodpet".bold(), session.user_name().cyan());
    println!();
    println!("  points:  {}", session.total_points());
    println!("  streak:  {} day(s)", session.streak(today));
    println!("  entries: {}", session.diary().len());
    println!();

    match session.pet_form() {
        PetForm::Egg => println!(
            "  pet:     {} ({}/{} feeds, {:.0}%)",
            "EGG".yellow(),
            pet.total_feeds,
            pet.evolution_threshold,
            pet.progress() * 100.0
        ),
        PetForm::Evolved(mood) => println!(
            "  pet:     {} {}",
            mood.symbol(),
            format!("{} elf", mood.name()).green().bold()
        ),
    }
    println!(
        "  potions granted today: {}/{}",
        MAX_DAILY_POTIONS - pet.daily_potions_left(today),
        MAX_DAILY_POTIONS
    );

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Potion", "Stock", "Fed"]);
    for mood in Mood::ALL {
        table.add_row(vec![
            format!("{} {}", mood.symbol(), mood.name()),
            pet.potions(mood).to_string(),
            pet.emotion_counts.get(mood).to_string(),
        ]);
    }
    println!("{table}");
    println!();

    if let Some(fortune) = session.todays_fortune(today) {
        println!("  fortune: {}", fortune.result);
    }
    println!("  {}", session.advice(today).message().dimmed());

    Ok(())
}
