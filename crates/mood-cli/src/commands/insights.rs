use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use mood_core::ActivityTag;

use super::Context;

pub fn run(ctx: &Context) -> Result<(), String> {
    let session = ctx.open()?;
    let Some(insights) = session.insights() else {
        println!("  No entries yet. Write your first one!");
        return Ok(());
    };

    println!("  {}", "Insights".bold());
    println!();
    println!("  first entry:   {}", insights.first_entry);
    println!("  total entries: {}", insights.total_entries);
    println!(
        "  top mood:      {} {}",
        insights.top_mood.symbol(),
        insights.top_mood.name()
    );
    println!();

    print_tags("Top activities", &insights.top_tags);
    print_tags("On happy days", &insights.happy_tags);
    Ok(())
}

fn print_tags(title: &str, tags: &[(ActivityTag, usize)]) {
    if tags.is_empty() {
        println!("  {}: {}", title, "none".dimmed());
        return;
    }
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![title, "Entries"]);
    for (tag, count) in tags {
        table.add_row(vec![tag.label().to_string(), count.to_string()]);
    }
    println!("{table}");
}
