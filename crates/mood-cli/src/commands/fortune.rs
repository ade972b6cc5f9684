use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut session = ctx.open()?;
    let draw = session.draw_fortune(ctx.today).map_err(|e| e.to_string())?;
    let result = &draw.state.result;

    println!("  {}", result.tier.to_string().bold());
    println!("  {}", result.description);
    if draw.already_drawn {
        println!();
        println!("  {}", "You already drew today's fortune.".dimmed());
    }
    Ok(())
}
