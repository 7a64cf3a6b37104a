//! Shared batch state and channels for the conversion worker pool.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pipeline::sidecar::Sidecar;
use crate::types::{Outcome, SourceTrack};
use crate::utils::config::Config;

/// State shared by the dispatch thread and every conversion worker. Built
/// once per batch and passed around behind an Arc.
pub struct BatchContext {
    pub cfg: Config,
    pub sidecar: Sidecar,
    /// Process-wide cancel flag (set by the Ctrl+C handler).
    pub cancel: Arc<AtomicBool>,
}

impl BatchContext {
    pub fn new(cfg: Config, sidecar: Sidecar, cancel: Arc<AtomicBool>) -> Self {
        Self {
            cfg,
            sidecar,
            cancel,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }
}

/// Channels for the worker pool: dispatch feeds tracks in, workers send
/// (track, outcome) pairs back for aggregation.
pub struct BatchChannels {
    pub track_tx: Sender<SourceTrack>,
    pub track_rx: Receiver<SourceTrack>,
    pub outcome_tx: Sender<(SourceTrack, Outcome)>,
    pub outcome_rx: Receiver<(SourceTrack, Outcome)>,
}

pub fn create_batch_channels(cap: usize) -> BatchChannels {
    let (track_tx, track_rx) = bounded::<SourceTrack>(cap);
    let (outcome_tx, outcome_rx) = bounded::<(SourceTrack, Outcome)>(cap);
    BatchChannels {
        track_tx,
        track_rx,
        outcome_tx,
        outcome_rx,
    }
}
