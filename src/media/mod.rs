//! External tool collaborators, invoked over a process boundary.
//!
//! Three opaque tools do the actual audio work: a probe (stream duration), a
//! mux/filter tool (silence synthesis, stream extraction, remuxing), and a
//! container tagger. Each invocation blocks the calling worker until the
//! subprocess exits; a non-zero exit aborts the current file only, carrying
//! the tool's stderr as the diagnostic.
//!
//! TODO: bound subprocess runtime so a hung tool stalls one file, not the
//! whole worker (needs process-group kill on timeout).

pub mod mux;
pub mod probe;
pub mod tag;

pub use mux::{extract_stems, remux_tracks, synthesize_silence};
pub use probe::probe_duration;
pub use tag::tag_tracks;

use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use thiserror::Error;

/// Errors crossing the process boundary to an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool could not be started at all (missing binary, permissions).
    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and exited non-zero; stderr is kept for the report.
    #[error("{tool} {status}: {stderr}")]
    Failed {
        tool: String,
        status: String,
        stderr: String,
    },

    /// The tool exited zero but its output was not understood.
    #[error("{tool} output not understood: {detail}")]
    BadOutput { tool: String, detail: String },
}

/// Short display name for a tool binary (file name, not the full path).
pub(crate) fn tool_name(bin: &Path) -> String {
    bin.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| bin.display().to_string())
}

/// Run `bin` with `args`, capturing output. Non-zero exit becomes
/// [`ToolError::Failed`] with the tool's stderr attached.
pub fn run_tool(bin: &Path, args: &[OsString]) -> Result<Output, ToolError> {
    let tool = tool_name(bin);
    log::debug!("invoking {} {:?}", tool, args);
    let output = Command::new(bin)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ToolError::Launch {
            tool: tool.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ToolError::Failed {
            tool,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        });
    }
    Ok(output)
}
