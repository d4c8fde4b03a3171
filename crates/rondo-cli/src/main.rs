use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rondo_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "rondo")]
#[command(author, version, about = "A circular task list for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// Print all tasks
    List,
    /// Append a task without opening the TUI
    Add {
        /// Task title
        title: String,
    },
    /// Remove all completed tasks
    Clear,
}

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config),
        Some(Commands::List) => commands::list::run(&config),
        Some(Commands::Add { title }) => commands::add::run(&config, &title),
        Some(Commands::Clear) => commands::clear::run(&config),
    }
}
