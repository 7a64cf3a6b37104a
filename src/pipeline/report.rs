//! Batch outcome reporting: colored summary line and failure list.

use colored::Colorize;
use log::{info, warn};

use crate::types::BatchSummary;

/// Print the terminal summary for a run.
pub fn print_summary(summary: &BatchSummary, dry_run: bool) {
    let converted_label = if dry_run { "Would convert" } else { "Converted" };
    info!(
        "{} | {} | {}",
        format!("{}: {}", converted_label, summary.published).green(),
        format!("Skipped: {}", summary.skipped).yellow(),
        format!("Failed: {}", summary.failed).red()
    );

    if !summary.failures.is_empty() {
        warn!("Failed files:");
        for (path, reason) in &summary.failures {
            warn!("  {}: {}", path.display(), reason);
        }
    }
    if summary.cancelled {
        warn!("Run was cancelled before completion.");
    }
    info!("File conversion complete.");
}
