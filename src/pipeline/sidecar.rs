//! Run-wide metadata sidecar consumed by every tag stage.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::utils::config::SidecarFields;

/// Tag fields shared by every file in a run: written once at batch start,
/// read-only afterwards. The temp file lives as long as this value and is
/// removed on drop.
pub struct Sidecar {
    file: NamedTempFile,
}

impl Sidecar {
    /// Write the sidecar for this run.
    pub fn write() -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("restem-itags-")
            .suffix(".txt")
            .tempfile()
            .context("create metadata sidecar")?;
        writeln!(file, "tool={}", SidecarFields::TOOL)?;
        writeln!(file, "created={}", SidecarFields::CREATED)?;
        writeln!(file, "rate={}", SidecarFields::RATE)?;
        file.flush().context("flush metadata sidecar")?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
