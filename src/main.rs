//! Restem CLI: convert stem exports; use --dry-run to preview without writing.

use anyhow::Result;
use clap::Parser;
use restem::engine::arg_parser::Cli;
use restem::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
