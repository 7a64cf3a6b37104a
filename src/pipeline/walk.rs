//! Candidate discovery: lazy walk of the source tree for stem exports.

use std::path::Path;
use walkdir::WalkDir;

use crate::engine::tools::{matches_filter, strip_name_suffix};
use crate::types::SourceTrack;
use crate::utils::config::Config;

/// Build a SourceTrack from a file path carrying the input suffix.
fn track_from_path(path: &Path, input_suffix: &str) -> Option<SourceTrack> {
    let name = path.file_name()?.to_str()?;
    let base = strip_name_suffix(name, input_suffix)?;
    Some(SourceTrack {
        path: path.to_path_buf(),
        dir: path.parent()?.to_path_buf(),
        base_name: base.to_string(),
    })
}

/// Lazily yield one [`SourceTrack`] per matching file under the source root.
///
/// Each call re-walks the tree (restartable, no persisted cursor). Yield
/// order is directory-traversal order; nothing downstream depends on it.
/// Unreadable paths are logged and skipped, never fatal to discovery.
pub fn discover(cfg: &Config) -> impl Iterator<Item = SourceTrack> {
    WalkDir::new(&cfg.source_root)
        .into_iter()
        .filter_map(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    log::warn!("skipping unreadable path: {}", err);
                    return None;
                }
            };
            if !entry.file_type().is_file() {
                return None;
            }
            let path = entry.into_path();
            if !matches_filter(&path, &cfg.filter) {
                return None;
            }
            track_from_path(&path, &cfg.input_suffix)
        })
}
