//! Duration probe (ffprobe collaborator).

use std::ffi::OsString;
use std::path::Path;

use super::{ToolError, run_tool, tool_name};

/// Probe argument list: container duration in seconds, bare CSV on stdout.
pub fn probe_args(source: &Path) -> Vec<OsString> {
    vec![
        "-v".into(),
        "quiet".into(),
        "-show_entries".into(),
        "format=duration".into(),
        "-of".into(),
        "csv=p=0".into(),
        source.into(),
    ]
}

/// Probe the source container and return its duration in seconds.
pub fn probe_duration(bin: &Path, source: &Path) -> Result<f64, ToolError> {
    let output = run_tool(bin, &probe_args(source))?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let text = stdout.trim();
    text.parse::<f64>().map_err(|_| ToolError::BadOutput {
        tool: tool_name(bin),
        detail: format!("expected duration in seconds, got {text:?}"),
    })
}
