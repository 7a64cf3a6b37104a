//! The conversion state machine for one track, and its scoped workspace.
//!
//! Strict, non-branching stage order: probe → synthesize silence → extract
//! stems → remux → tag → publish. Any stage failure aborts this file only.
//! The atomic rename in the publish stage is the only writer of the final
//! destination path; nothing partial is ever visible there.

use anyhow::{Context, Result, bail};
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

use crate::media::{mux, probe, tag};
use crate::types::SourceTrack;
use crate::utils::config::{Config, TrackLayout, TrackSource};

/// Intermediate artifacts for one in-flight conversion. They live inside the
/// destination directory (same filesystem as the final path, so publish is a
/// true rename) and are uniquely named by the track's base name, so
/// concurrent conversions into the same directory never share a path.
pub struct Workspace {
    pub silence: PathBuf,
    pub stems: Vec<PathBuf>,
    pub remuxed: PathBuf,
    pub tagged: PathBuf,
}

impl Workspace {
    pub fn for_track(dest_dir: &Path, base_name: &str) -> Self {
        Self {
            silence: dest_dir.join(format!("{base_name}.silent.m4a")),
            stems: (0..TrackLayout::SOURCE_STREAMS)
                .map(|i| dest_dir.join(format!("{base_name}.stem_{i}.m4a")))
                .collect(),
            remuxed: dest_dir.join(format!("{base_name}.tmp.m4a")),
            tagged: dest_dir.join(format!("{base_name}.tagged.m4a")),
        }
    }

    fn all_paths(&self) -> impl Iterator<Item = &PathBuf> {
        [&self.silence, &self.remuxed, &self.tagged]
            .into_iter()
            .chain(self.stems.iter())
    }

    /// Best-effort removal of every intermediate actually created. Runs on
    /// success and on abort alike; failures are logged, never escalated.
    pub fn cleanup(&self) {
        for path in self.all_paths() {
            if path.exists()
                && let Err(err) = fs::remove_file(path)
            {
                warn!("could not remove intermediate {}: {}", path.display(), err);
            }
        }
    }
}

/// Run the full state machine for one track, publishing to `dest`. The
/// workspace is cleaned up whatever the outcome.
pub fn convert_track(
    cfg: &Config,
    sidecar: &Path,
    track: &SourceTrack,
    dest: &Path,
) -> Result<()> {
    let dest_dir = dest
        .parent()
        .with_context(|| format!("destination path has no parent: {}", dest.display()))?;
    let ws = Workspace::for_track(dest_dir, &track.base_name);
    let result = run_stages(cfg, sidecar, track, &ws, dest);
    ws.cleanup();
    result
}

fn run_stages(
    cfg: &Config,
    sidecar: &Path,
    track: &SourceTrack,
    ws: &Workspace,
    dest: &Path,
) -> Result<()> {
    let duration = probe::probe_duration(&cfg.probe_bin, &track.path)
        .context("probe source duration")?;

    mux::synthesize_silence(&cfg.mux_bin, duration, &ws.silence)
        .context("synthesize silent hihat track")?;

    mux::extract_stems(&cfg.mux_bin, &track.path, &ws.stems)
        .context("extract stem sub-streams")?;

    let tracks: Vec<(PathBuf, &str)> = TrackLayout::TRACKS
        .iter()
        .map(|(source, title)| {
            let path = match source {
                TrackSource::Stem(i) => ws.stems[*i].clone(),
                TrackSource::Silence => ws.silence.clone(),
            };
            (path, *title)
        })
        .collect();
    mux::remux_tracks(&cfg.mux_bin, &tracks, &ws.remuxed).context("remux output tracks")?;

    let titles = TrackLayout::titles();
    tag::tag_tracks(&cfg.tag_bin, &ws.remuxed, sidecar, &titles, &ws.tagged)
        .context("tag output container")?;

    publish(&ws.tagged, dest)
}

/// Atomic rename into the final path. A file that appeared here since
/// resolution means another run got there first; surface the conflict and
/// leave the existing file alone.
fn publish(tagged: &Path, dest: &Path) -> Result<()> {
    if dest.exists() {
        bail!("destination appeared during conversion: {}", dest.display());
    }
    fs::rename(tagged, dest).with_context(|| format!("publish {}", dest.display()))
}
