//! CLI command handler: build the run Config (file < CLI) and drive the batch.

use anyhow::{Context, Result, bail};
use log::warn;
use regex::Regex;

use crate::engine::arg_parser::Cli;
use crate::pipeline::print_summary;
use crate::utils::config::{Config, Suffixes, ToolBins};
use crate::utils::restem_toml::{Overlay, load_restem_toml};
use crate::utils::setup_logging;

fn cli_overlay(cli: &Cli) -> Overlay {
    Overlay {
        base_dir: cli.base_dir.clone(),
        filter: cli.filter.clone(),
        jobs: cli.jobs,
        input_suffix: cli.input_suffix.clone(),
        output_suffix: cli.output_suffix.clone(),
        probe_bin: cli.probe_bin.clone(),
        mux_bin: cli.mux_bin.clone(),
        tag_bin: cli.tag_bin.clone(),
    }
}

/// Finalize a Config from CLI flags over `.restem.toml` over crate defaults.
fn build_config(cli: &Cli) -> Result<Config> {
    let overlay = cli_overlay(cli).or(load_restem_toml(&cli.source).unwrap_or_default());

    let checksum_base = overlay
        .base_dir
        .context("--base-dir is required (or base_dir in .restem.toml)")?;

    let filter = overlay
        .filter
        .filter(|p| !p.is_empty())
        .map(|p| Regex::new(&p).with_context(|| format!("invalid filter regex {p:?}")))
        .transpose()?;

    Ok(Config {
        source_root: cli.source.clone(),
        dest_root: cli.dest.clone(),
        checksum_base,
        input_suffix: overlay
            .input_suffix
            .unwrap_or_else(|| Suffixes::INPUT.to_string()),
        output_suffix: overlay
            .output_suffix
            .unwrap_or_else(|| Suffixes::OUTPUT.to_string()),
        filter,
        jobs: overlay.jobs.unwrap_or(1).max(1),
        dry_run: cli.dry_run,
        verbose: cli.verbose,
        probe_bin: overlay.probe_bin.unwrap_or_else(|| ToolBins::PROBE.into()),
        mux_bin: overlay.mux_bin.unwrap_or_else(|| ToolBins::MUX.into()),
        tag_bin: overlay.tag_bin.unwrap_or_else(|| ToolBins::TAG.into()),
    })
}

/// Run the batch (default) or resolve-only when --dry-run.
pub fn handle_run(cli: &Cli) -> Result<()> {
    setup_logging(cli.verbose);
    let cfg = build_config(cli)?;
    if cfg.dry_run {
        warn!("RUNNING IN DRY-RUN MODE. NO FILES WILL BE WRITTEN.");
    }

    let summary = crate::convert_tree(&cfg)?;
    print_summary(&summary, cfg.dry_run);

    if summary.cancelled {
        bail!("conversion cancelled by user");
    }
    if summary.failed > 0 {
        bail!("{} of {} files failed to convert", summary.failed, summary.total());
    }
    Ok(())
}
