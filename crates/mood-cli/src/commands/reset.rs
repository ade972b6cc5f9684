use colored::Colorize;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let mut session = ctx.open()?;
    session.reset_pet(ctx.today).map_err(|e| e.to_string())?;
    let reset = "Reset.".bold();
    println!("  {reset} Your pet is an egg again. Potions were kept.");
    Ok(())
}
