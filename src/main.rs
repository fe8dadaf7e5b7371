use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fincheck::cli::{
    handle_fields_command, handle_sample_command, handle_score_command, handle_theme_command,
    ScoreArgs,
};
use fincheck::config::{paths::FincheckPaths, settings::Settings, Theme};

#[derive(Parser)]
#[command(
    name = "fincheck",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based personal finance health score calculator",
    long_about = "fincheck reads a snapshot of income and expense fields, \
                  normalizes everything to a monthly cadence, and scores \
                  your budget against the 50/30/20 rule: needs at most \
                  half of net income, and a fifth of it saved."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a snapshot of income and expense fields
    Score(ScoreArgs),

    /// List the canonical input fields and how they are classified
    Fields,

    /// Print a built-in sample snapshot as JSON (pipe into `score`)
    Sample {
        /// Sample name: starter, balanced, or stretched
        name: String,
    },

    /// Show or set the UI theme preference
    Theme {
        /// Theme to persist; shows the current theme when omitted
        theme: Option<Theme>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FincheckPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Score(args) => {
            handle_score_command(&settings, args)?;
        }
        Commands::Fields => {
            handle_fields_command();
        }
        Commands::Sample { name } => {
            handle_sample_command(&name)?;
        }
        Commands::Theme { theme } => {
            handle_theme_command(&paths, settings, theme)?;
        }
        Commands::Config => {
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Initialized:     {}", paths.is_initialized());
            println!("Theme:           {}", settings.theme);
            println!("Currency symbol: {}", settings.currency_symbol);
            println!(
                "Chart includes savings slice: {}",
                settings.chart_includes_savings
            );
        }
    }

    Ok(())
}
