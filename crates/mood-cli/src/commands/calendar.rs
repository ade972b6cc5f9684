use chrono::Datelike;
use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::{Context, parse_month};

pub fn run(ctx: &Context, month: Option<&str>) -> Result<(), String> {
    let (year, month) = match month {
        Some(raw) => parse_month(raw)?,
        None => (ctx.today.year(), ctx.today.month()),
    };
    let session = ctx.open()?;
    let cells = session
        .diary()
        .month(year, month)
        .map_err(|e| e.to_string())?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

    let offset = cells
        .first()
        .map_or(0, |c| c.date.weekday().num_days_from_monday() as usize);
    let mut row: Vec<String> = vec![String::new(); offset];
    for cell in &cells {
        let symbol = cell.mood.map_or("·", |m| m.symbol());
        row.push(format!("{:>2} {symbol}", cell.date.day()));
        if row.len() == 7 {
            table.add_row(std::mem::take(&mut row));
        }
    }
    if !row.is_empty() {
        row.resize(7, String::new());
        table.add_row(row);
    }

    println!("  {}", format!("{year}-{month:02}").bold());
    println!("{table}");
    let logged = cells.iter().filter(|c| c.mood.is_some()).count();
    println!();
    println!("  {logged} day(s) logged");
    Ok(())
}
