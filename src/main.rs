use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use fintro::cli::{handle_drills_command, handle_snapshot_command, DrillsArgs};
use fintro::config::{paths::FintroPaths, settings::Settings};
use fintro::samples;
use fintro::tui;

#[derive(Parser)]
#[command(
    name = "fintro",
    author = "Jay Damani",
    version,
    about = "Terminal personal-finance practice demos",
    long_about = "fintro bundles three small personal-finance demos: a data-type \
                  snapshot, a set of control-flow drills over sample lists, and a \
                  terminal window with a static income-vs-expenses bar chart."
)]
struct Cli {
    /// Path to a settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample account snapshot
    Snapshot,

    /// Run the control-flow drills over the sample lists
    Drills(DrillsArgs),

    /// Open the income-vs-expenses chart window
    #[command(alias = "ui")]
    Chart,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    fintro::logging::init(cli.verbose);

    // Resolve settings
    let paths = FintroPaths::new()?;
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_default(&paths)?,
    };
    debug!(?settings, "settings resolved");

    match cli.command {
        Some(Commands::Snapshot) => {
            handle_snapshot_command(&settings)?;
        }
        Some(Commands::Drills(args)) => {
            handle_drills_command(&settings, &args)?;
        }
        Some(Commands::Chart) => {
            tui::run_chart(samples::cashflow_series(), &settings)?;
        }
        Some(Commands::Config) => {
            println!("fintro Configuration");
            println!("====================");
            println!("Config directory: {}", paths.config_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:         {}", settings.currency_symbol);
            println!(
                "  Low balance threshold:   {}",
                settings.low_balance_threshold
            );
            println!(
                "  Large expense threshold: {}",
                settings.large_expense_threshold
            );
            println!("  Chart tick rate:         {}ms", settings.tick_rate_ms);
        }
        None => {
            println!("fintro - Terminal personal-finance practice demos");
            println!();
            println!("Run 'fintro --help' for usage information.");
            println!("Run 'fintro chart' to open the sample chart window.");
        }
    }

    Ok(())
}
