//! Batch driver: discovery → resolve → convert, with per-file isolation.
//!
//! One bad file never aborts the batch; its failure is recorded and the next
//! candidate is processed. Re-running the whole batch is the retry
//! mechanism, made safe by the resolver's existence gate.

use anyhow::{Context, Result};
use log::{error, info, warn};
use std::fs;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use std::thread;

use crate::engine::progress::{create_counter, refresh_bar, update_progress_bar};
use crate::pipeline::context::{BatchChannels, BatchContext, create_batch_channels};
use crate::pipeline::convert::convert_track;
use crate::pipeline::resolve::{Resolution, ensure_destination_dir, resolve};
use crate::pipeline::sidecar::Sidecar;
use crate::pipeline::walk::discover;
use crate::pipeline::TRACK_CHANNEL_CAP;
use crate::types::{BatchSummary, Outcome, SourceTrack};
use crate::utils::config::Config;

static CANCEL_FLAG: OnceLock<Arc<AtomicBool>> = OnceLock::new();

/// Process-wide cancel flag, armed with a Ctrl+C handler on first use (the
/// handler can only register once per process). Reset at each batch start.
fn cancel_flag() -> Arc<AtomicBool> {
    CANCEL_FLAG
        .get_or_init(|| {
            let flag = Arc::new(AtomicBool::new(false));
            let handler_flag = Arc::clone(&flag);
            if let Err(err) = ctrlc::set_handler(move || {
                handler_flag.store(true, Ordering::Relaxed);
            }) {
                warn!("Ctrl+C handler unavailable: {}", err);
            }
            flag
        })
        .clone()
}

/// Run one batch: ensure the destination root, write the run sidecar, then
/// convert every candidate. `--dry-run` resolves and reports only.
pub fn run_batch(cfg: &Config) -> Result<BatchSummary> {
    if cfg.dry_run {
        return Ok(dry_run(cfg));
    }

    if !cfg.dest_root.exists() {
        info!("Creating output directory: {}", cfg.dest_root.display());
        fs::create_dir_all(&cfg.dest_root).with_context(|| {
            format!("create destination root {}", cfg.dest_root.display())
        })?;
    }

    info!(
        "Starting conversion from '{}' to '{}'...",
        cfg.source_root.display(),
        cfg.dest_root.display()
    );

    let sidecar = Sidecar::write()?;
    let cancel = cancel_flag();
    cancel.store(false, Ordering::Relaxed);
    let ctx = Arc::new(BatchContext::new(cfg.clone(), sidecar, cancel));

    if ctx.cfg.jobs > 1 {
        run_concurrent(&ctx)
    } else {
        Ok(run_sequential(&ctx))
    }
}

/// Resolve then convert one track, catching every failure at this boundary.
fn process_track(ctx: &BatchContext, track: &SourceTrack) -> Outcome {
    match try_process(ctx, track) {
        Ok(outcome) => outcome,
        Err(err) => {
            error!("Error converting {}: {:#}", track.path.display(), err);
            Outcome::Failed {
                reason: format!("{err:#}"),
            }
        }
    }
}

fn try_process(ctx: &BatchContext, track: &SourceTrack) -> Result<Outcome> {
    match resolve(track, &ctx.cfg) {
        Resolution::AlreadyProcessed { dest } => {
            info!("Already exists, skipping: {}", dest.display());
            Ok(Outcome::Skipped { dest })
        }
        Resolution::Convert { dest } => {
            ensure_destination_dir(&dest)?;
            info!("Converting {}...", track.path.display());
            convert_track(&ctx.cfg, ctx.sidecar.path(), track, &dest)?;
            info!("Converted {} -> {}", track.path.display(), dest.display());
            Ok(Outcome::Published { dest })
        }
    }
}

/// Reference behavior: one file at a time, in discovery order.
fn run_sequential(ctx: &BatchContext) -> BatchSummary {
    let mut summary = BatchSummary::default();
    let bar = ctx.cfg.verbose.then(|| create_counter("Converting"));
    if let Some(b) = &bar {
        refresh_bar(b);
    }

    for track in discover(&ctx.cfg) {
        if ctx.is_cancelled() {
            warn!("Cancellation requested; stopping before remaining files.");
            summary.cancelled = true;
            break;
        }
        let outcome = process_track(ctx, &track);
        summary.record(&track, &outcome);
        if let Some(b) = &bar {
            update_progress_bar(b, 1);
        }
    }
    summary
}

/// Bounded worker pool: a dispatch thread feeds the track channel, workers
/// convert, outcomes drain back here for aggregation. Safe because each
/// track's workspace is uniquely named and directory creation tolerates
/// racing workers.
fn run_concurrent(ctx: &Arc<BatchContext>) -> Result<BatchSummary> {
    let BatchChannels {
        track_tx,
        track_rx,
        outcome_tx,
        outcome_rx,
    } = create_batch_channels(TRACK_CHANNEL_CAP);

    let dispatch_ctx = Arc::clone(ctx);
    let dispatch_handle = thread::spawn(move || {
        let mut cancelled = false;
        for track in discover(&dispatch_ctx.cfg) {
            if dispatch_ctx.is_cancelled() {
                warn!("Cancellation requested; stopping before remaining files.");
                cancelled = true;
                break;
            }
            if track_tx.send(track).is_err() {
                break;
            }
        }
        drop(track_tx);
        cancelled
    });

    let worker_handles: Vec<_> = (0..ctx.cfg.jobs)
        .map(|_| {
            let track_rx = track_rx.clone();
            let outcome_tx = outcome_tx.clone();
            let ctx = Arc::clone(ctx);
            thread::spawn(move || {
                while let Ok(track) = track_rx.recv() {
                    let outcome = process_track(&ctx, &track);
                    if outcome_tx.send((track, outcome)).is_err() {
                        break;
                    }
                }
                drop(outcome_tx);
            })
        })
        .collect();

    // Dropping the last senders closes the channels so the drain ends.
    drop(track_rx);
    drop(outcome_tx);

    let bar = ctx.cfg.verbose.then(|| create_counter("Converting"));
    if let Some(b) = &bar {
        refresh_bar(b);
    }

    let mut summary = BatchSummary::default();
    while let Ok((track, outcome)) = outcome_rx.recv() {
        summary.record(&track, &outcome);
        if let Some(b) = &bar {
            update_progress_bar(b, 1);
        }
    }

    let cancelled = dispatch_handle
        .join()
        .map_err(|_| anyhow::anyhow!("dispatch thread panicked"))?;
    for h in worker_handles {
        let _ = h.join();
    }
    summary.cancelled = cancelled || ctx.is_cancelled();
    Ok(summary)
}

/// Resolve-only pass: report what a real run would do, touch nothing.
fn dry_run(cfg: &Config) -> BatchSummary {
    let mut summary = BatchSummary::default();
    for track in discover(cfg) {
        let outcome = match resolve(&track, cfg) {
            Resolution::AlreadyProcessed { dest } => {
                info!("Already exists, would skip: {}", dest.display());
                Outcome::Skipped { dest }
            }
            Resolution::Convert { dest } => {
                info!("Would convert {} -> {}", track.path.display(), dest.display());
                Outcome::Published { dest }
            }
        };
        summary.record(&track, &outcome);
    }
    summary
}
