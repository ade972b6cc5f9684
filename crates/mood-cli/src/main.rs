//! CLI frontend for the Moodpet mood journal.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use commands::Context;

#[derive(Parser)]
#[command(
    name = "moodpet",
    about = "Moodpet: a mood journal that hatches a pet from your feelings",
    version,
    propagate_version = true
)]
struct Cli {
    /// Your display name (selects the diary file)
    #[arg(short, long)]
    user: String,

    /// Directory holding diary files
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// RNG seed for reproducible reflections and fortunes
    #[arg(long)]
    seed: Option<u64>,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long)]
    today: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show points, streak, pet, and this week's advice
    Status,

    /// Write (or overwrite) a diary entry
    Write {
        /// Mood name or symbol (e.g. happy, 😀)
        #[arg(short, long)]
        mood: String,

        /// Entry text
        #[arg(short, long, default_value = "")]
        text: String,

        /// Activity tag (repeatable), e.g. work, exercise
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Entry date (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Feed the pet one potion
    Feed {
        /// Mood name or symbol of the potion
        mood: String,
    },

    /// Turn the pet back into an egg (potions are kept)
    ResetPet,

    /// Draw today's fortune
    Fortune,

    /// Show a month of moods
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show journal statistics
    Insights,

    /// Show the writing prompt of the day
    Prompt {
        /// Date of the prompt (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Show the entry for a date
    Show {
        /// Entry date (YYYY-MM-DD)
        date: String,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .init();
}

fn dispatch(ctx: &Context, command: Commands) -> Result<(), String> {
    match command {
        Commands::Status => commands::status::run(ctx),
        Commands::Write {
            mood,
            text,
            tags,
            date,
        } => commands::write::run(ctx, &mood, &text, &tags, date.as_deref()),
        Commands::Feed { mood } => commands::feed::run(ctx, &mood),
        Commands::ResetPet => commands::reset::run(ctx),
        Commands::Fortune => commands::fortune::run(ctx),
        Commands::Calendar { month } => commands::calendar::run(ctx, month.as_deref()),
        Commands::Insights => commands::insights::run(ctx),
        Commands::Prompt { date } => commands::prompt::run(ctx, date.as_deref()),
        Commands::Show { date } => commands::show::run(ctx, &date),
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let today = cli.today.as_deref();
    let result = Context::new(cli.user, cli.data_dir, cli.seed, today)
        .and_then(|ctx| dispatch(&ctx, cli.command));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
