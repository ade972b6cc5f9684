use mood_core::catalog::daily_prompt;

use super::{Context, parse_date};

pub fn run(ctx: &Context, date: Option<&str>) -> Result<(), String> {
    let date = match date {
        Some(raw) => parse_date(raw)?,
        None => ctx.today,
    };
    println!("  {}", daily_prompt(date));
    Ok(())
}
