use colored::Colorize;

use super::{Context, parse_date};

pub fn run(ctx: &Context, date: &str) -> Result<(), String> {
    let date = parse_date(date)?;
    let session = ctx.open()?;
    let entry = session
        .diary()
        .get(date)
        .ok_or_else(|| format!("no entry for {date}"))?;

    println!(
        "  {} {} {}",
        date.to_string().bold(),
        entry.mood.symbol(),
        entry.mood.name().dimmed()
    );
    println!();
    if !entry.text.is_empty() {
        for line in entry.text.lines() {
            println!("  {}", line.trim());
        }
        println!();
    }
    if !entry.tags.is_empty() {
        let tags: Vec<&str> = entry.tags.iter().map(|t| t.label()).collect();
        println!("  tags:  {}", tags.join(", "));
    }
    println!("  score: {}/5", entry.score);
    println!();
    for line in entry.response.lines() {
        println!("  {}", line.replace("**", "").italic());
    }
    Ok(())
}
