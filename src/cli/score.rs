//! Score CLI command
//!
//! Bridges the clap arguments to the scorer: reads a JSON snapshot from a
//! file or stdin, applies field overrides, and renders or serializes the
//! resulting summary.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::render_summary;
use crate::error::{FincheckError, FincheckResult};
use crate::models::Snapshot;
use crate::services::Scorer;

/// Arguments for the score command
#[derive(Args)]
pub struct ScoreArgs {
    /// Path to a JSON snapshot file; reads stdin when omitted
    /// (unless fields are supplied with --set)
    pub file: Option<PathBuf>,

    /// Override or supply a field value (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,

    /// Print the summary as JSON instead of rendering it
    #[arg(long)]
    pub json: bool,

    /// Fail on malformed numeric fields instead of treating them as 0
    #[arg(long)]
    pub strict: bool,

    /// Include the savings slice in the category chart
    #[arg(long, overrides_with = "no_savings_slice")]
    pub savings_slice: bool,

    /// Exclude the savings slice from the category chart
    #[arg(long)]
    pub no_savings_slice: bool,
}

/// Handle the score command
pub fn handle_score_command(settings: &Settings, args: ScoreArgs) -> FincheckResult<()> {
    let mut snapshot = read_snapshot(&args)?;

    for warning in snapshot.warnings() {
        eprintln!("warning: {}", warning);
    }
    if args.strict && !snapshot.warnings().is_empty() {
        return Err(FincheckError::Validation(format!(
            "{} field(s) could not be read as numbers",
            snapshot.warnings().len()
        )));
    }

    for assignment in &args.set {
        snapshot.apply_override(assignment)?;
    }

    let summary = Scorer::score(&snapshot);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        let include_savings = if args.no_savings_slice {
            false
        } else if args.savings_slice {
            true
        } else {
            settings.chart_includes_savings
        };
        print!(
            "{}",
            render_summary(&summary, &settings.currency_symbol, include_savings)
        );
    }
    Ok(())
}

/// Read the input snapshot from the file argument, stdin, or start empty
/// when only --set overrides are given
fn read_snapshot(args: &ScoreArgs) -> FincheckResult<Snapshot> {
    match &args.file {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                FincheckError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;
            Snapshot::from_json_str(&contents)
        }
        None if !args.set.is_empty() => Ok(Snapshot::new()),
        None => {
            let contents = std::io::read_to_string(std::io::stdin())
                .map_err(|e| FincheckError::Io(format!("Failed to read stdin: {}", e)))?;
            Snapshot::from_json_str(&contents)
        }
    }
}
