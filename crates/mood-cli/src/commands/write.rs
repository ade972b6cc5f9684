use colored::Colorize;
use mood_core::{ActivityTag, EntryDraft, Mood, PotionGrant};

use super::{Context, parse_date};

pub fn run(
    ctx: &Context,
    mood: &str,
    text: &str,
    tags: &[String],
    date: Option<&str>,
) -> Result<(), String> {
    let mood = Mood::parse_strict(mood).map_err(|e| e.to_string())?;
    let tags = tags
        .iter()
        .map(|t| ActivityTag::parse(t))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => ctx.today,
    };

    let mut session = ctx.open()?;
    let draft = EntryDraft::new(date, mood).with_text(text).with_tags(tags);
    let reward = session
        .save_entry(draft, ctx.today)
        .map_err(|e| e.to_string())?;

    if reward.is_new {
        println!(
            "  {} entry for {date} {}",
            "Saved".green().bold(),
            format!("(+{} points)", reward.reward_points).yellow()
        );
    } else {
        let updated = "Updated".green().bold();
        println!("  {updated} entry for {date} (no new points)");
    }
    println!();
    for line in reward.response.lines() {
        println!("  {}", line.replace("**", ""));
    }
    println!();

    match reward.potion {
        PotionGrant::Granted(m) => println!("  You got a {} {} potion!", m.symbol(), m.name()),
        PotionGrant::DailyCapReached => {
            let note = "Daily potion limit reached, come back tomorrow.";
            println!("  {}", note.dimmed())
        }
        PotionGrant::UnknownMood => {}
    }
    println!("  streak: {} day(s)", session.streak(ctx.today));

    if let Some(fact) = session.surprise_fact() {
        println!();
        println!("  {} {fact}", "Surprise!".magenta().bold());
    }

    Ok(())
}
