//! Destination resolution: canonical-path mapping and the idempotency gate.
//!
//! Destination names reflect where the *original* (pre-stem) files live, not
//! where the stem exports sit, so the converted library lines up with the
//! player's view of the un-stemmed collection.

use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::engine::naming::destination_dir_name;
use crate::engine::tools::path_relative_to;
use crate::types::SourceTrack;
use crate::utils::config::Config;

/// What the resolver decided for one track.
#[derive(Clone, Debug)]
pub enum Resolution {
    /// No output yet; convert into `dest`.
    Convert { dest: PathBuf },
    /// `dest` already exists from an earlier run; do not touch it.
    AlreadyProcessed { dest: PathBuf },
}

/// Canonical pre-stem directory for a track: the checksum base itself when
/// the track sits directly in the source root, otherwise the base joined
/// with the track directory's path relative to the root.
pub fn checksum_path(track_dir: &Path, cfg: &Config) -> PathBuf {
    match path_relative_to(track_dir, &cfg.source_root) {
        Some(rel) if !rel.as_os_str().is_empty() => cfg.checksum_base.join(rel),
        _ => cfg.checksum_base.clone(),
    }
}

/// Final destination path for a track. Pure; creates nothing.
pub fn destination_for(track: &SourceTrack, cfg: &Config) -> PathBuf {
    let canonical = checksum_path(&track.dir, cfg);
    let subdir = destination_dir_name(&canonical.to_string_lossy());
    cfg.dest_root
        .join(subdir)
        .join(format!("{}{}", track.base_name, cfg.output_suffix))
}

/// Existence gate: a file already at the destination path means an earlier
/// run published it. Skipping is a distinguished result, not an error, and
/// it is what makes re-running a whole batch the retry mechanism.
pub fn resolve(track: &SourceTrack, cfg: &Config) -> Resolution {
    let dest = destination_for(track, cfg);
    if dest.exists() {
        Resolution::AlreadyProcessed { dest }
    } else {
        Resolution::Convert { dest }
    }
}

/// Create the destination directory for `dest` when missing. Idempotent and
/// tolerant of another worker creating it first. Returns true when this call
/// found it absent (and logged the creation).
pub fn ensure_destination_dir(dest: &Path) -> Result<bool> {
    let dir = dest
        .parent()
        .with_context(|| format!("destination path has no parent: {}", dest.display()))?;
    if dir.is_dir() {
        return Ok(false);
    }
    info!("Creating output directory: {}", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("create destination directory {}", dir.display()))?;
    Ok(true)
}
