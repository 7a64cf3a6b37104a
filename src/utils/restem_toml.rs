//! Load `.restem.toml` from the source root (CLI only). Lib callers build a
//! [`Config`](crate::utils::config::Config) directly.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional settings a run can take from file or flags. CLI values win over
/// file values; anything still unset falls back to the crate defaults.
#[derive(Debug, Default, Deserialize)]
pub struct Overlay {
    pub base_dir: Option<PathBuf>,
    pub filter: Option<String>,
    pub jobs: Option<usize>,
    pub input_suffix: Option<String>,
    pub output_suffix: Option<String>,
    pub probe_bin: Option<PathBuf>,
    pub mux_bin: Option<PathBuf>,
    pub tag_bin: Option<PathBuf>,
}

impl Overlay {
    /// Field-by-field precedence merge: values in `self` win.
    pub fn or(self, fallback: Overlay) -> Overlay {
        Overlay {
            base_dir: self.base_dir.or(fallback.base_dir),
            filter: self.filter.or(fallback.filter),
            jobs: self.jobs.or(fallback.jobs),
            input_suffix: self.input_suffix.or(fallback.input_suffix),
            output_suffix: self.output_suffix.or(fallback.output_suffix),
            probe_bin: self.probe_bin.or(fallback.probe_bin),
            mux_bin: self.mux_bin.or(fallback.mux_bin),
            tag_bin: self.tag_bin.or(fallback.tag_bin),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RestemToml {
    #[serde(default)]
    settings: Overlay,
}

/// Load `.restem.toml` from `dir` if present. Returns None if the file is
/// missing or unreadable; a malformed file is warned about and ignored.
pub fn load_restem_toml(dir: &Path) -> Option<Overlay> {
    let path = dir.join(".restem.toml");
    let s = std::fs::read_to_string(&path).ok()?;
    toml::from_str::<RestemToml>(&s)
        .map_err(|e| log::warn!("{}: {}", path.display(), e))
        .ok()
        .map(|f| f.settings)
}
