//! Sample CLI command
//!
//! Prints a built-in sample snapshot as JSON, pipeable into `score`.

use crate::error::{FincheckError, FincheckResult};
use crate::models::Snapshot;

/// Handle the sample command
pub fn handle_sample_command(name: &str) -> FincheckResult<()> {
    let snapshot = Snapshot::sample(name).ok_or_else(|| {
        FincheckError::Validation(format!(
            "unknown sample '{}' (available: {})",
            name,
            Snapshot::SAMPLE_NAMES.join(", ")
        ))
    })?;
    println!("{}", snapshot.to_json_string()?);
    Ok(())
}
