use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

mod commands;
mod journal;

#[derive(Parser)]
#[command(name = "cafit", version, about = "Cafit CLI")]
struct Cli {
    /// Intake journal file (JSON); defaults to the user data directory
    #[arg(long, global = true, value_name = "FILE")]
    journal: Option<PathBuf>,

    /// Settings file (TOML); defaults to the user config directory
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a consumed beverage
    Log(commands::log::LogArgs),
    /// List recorded intakes
    History(commands::history::HistoryArgs),
    /// Current caffeine status and recommendation
    Status(commands::status::StatusArgs),
    /// Check a prospective drink without recording it
    Check(commands::check::CheckArgs),
    /// Hourly residual-caffeine forecast
    Timeline(commands::timeline::TimelineArgs),
    /// Intake statistics
    Stats {
        #[command(subcommand)]
        action: commands::stats::StatsAction,
    },
    /// Settings management
    Settings {
        #[command(subcommand)]
        action: commands::settings::SettingsAction,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

fn main() {
    let cli = Cli::parse();
    let ctx = commands::Context::new(cli.journal, cli.settings);

    let result = match cli.command {
        Commands::Log(args) => commands::log::run(&ctx, args),
        Commands::History(args) => commands::history::run(&ctx, args),
        Commands::Status(args) => commands::status::run(&ctx, args),
        Commands::Check(args) => commands::check::run(&ctx, args),
        Commands::Timeline(args) => commands::timeline::run(&ctx, args),
        Commands::Stats { action } => commands::stats::run(&ctx, action),
        Commands::Settings { action } => commands::settings::run(&ctx, action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "cafit", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
