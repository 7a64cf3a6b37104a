//! Restem: batch converter from per-track stem exports to multi-track
//! VirtualDJ containers, with destination names derived from the original
//! (pre-stem) library layout.

pub mod engine;
pub mod media;
pub mod pipeline;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

use log::debug;

/// Result alias used by public restem API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// Single entry point: convert every stem export under `cfg.source_root`
/// into `cfg.dest_root`, returning the per-file outcome totals.
///
/// Already-published files are skipped (destination existence is the only
/// ledger), and a failing file never aborts the rest of the batch; re-run
/// the whole batch to retry failures.
pub fn convert_tree(cfg: &utils::config::Config) -> Result<BatchSummary> {
    let config_str = format!(
        "{} CONFIG:{:#?}",
        env!("CARGO_PKG_NAME").to_string().to_uppercase(),
        cfg
    );
    debug!("{}", config_str);

    pipeline::run_batch(cfg)
}
