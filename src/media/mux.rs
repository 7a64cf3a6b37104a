//! Silence synthesis, stem extraction, and remuxing (ffmpeg collaborator).
//!
//! Extraction and remuxing are stream-copies; nothing is re-encoded. Only
//! the silent placeholder is encoded, once, to match the container codec.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::{ToolError, run_tool};

/// Generator source for the silent placeholder track.
pub const SILENCE_SOURCE: &str = "anullsrc=channel_layout=stereo:sample_rate=44100";

/// Arguments synthesizing `duration_secs` of stereo AAC silence into `out`.
pub fn silence_args(duration_secs: f64, out: &Path) -> Vec<OsString> {
    vec![
        "-f".into(),
        "lavfi".into(),
        "-i".into(),
        SILENCE_SOURCE.into(),
        "-t".into(),
        format!("{duration_secs}").into(),
        "-c:a".into(),
        "aac".into(),
        out.into(),
    ]
}

/// Arguments demuxing the source's first `outs.len()` audio sub-streams into
/// one single-stream file each, stream-copied, in one invocation.
pub fn extract_args(source: &Path, outs: &[PathBuf]) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-i".into(), source.into()];
    for (i, out) in outs.iter().enumerate() {
        args.push("-map".into());
        args.push(format!("0:a:{i}").into());
        args.push("-c".into());
        args.push("copy".into());
        args.push(out.into());
    }
    args
}

/// Arguments remuxing `tracks` (single-stream file + title, in final track
/// order) into one container. Every stream is copied, every track's default
/// disposition is cleared, and titles are written in input order; all three
/// loops run over the same slice, so they cannot disagree on count or order.
pub fn remux_args(tracks: &[(PathBuf, &str)], out: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    for (path, _) in tracks {
        args.push("-i".into());
        args.push(path.into());
    }
    for i in 0..tracks.len() {
        args.push("-map".into());
        args.push(format!("{i}:a").into());
    }
    args.push("-c:a".into());
    args.push("copy".into());
    for i in 0..tracks.len() {
        args.push(format!("-disposition:a:{i}").into());
        args.push("0".into());
    }
    args.push("-brand".into());
    args.push("isom".into());
    for (i, (_, title)) in tracks.iter().enumerate() {
        args.push(format!("-metadata:s:a:{i}").into());
        args.push(format!("title={title}").into());
    }
    args.push(out.into());
    args
}

/// Synthesize the silent placeholder track.
pub fn synthesize_silence(bin: &Path, duration_secs: f64, out: &Path) -> Result<(), ToolError> {
    run_tool(bin, &silence_args(duration_secs, out))?;
    Ok(())
}

/// Demux the source's audio sub-streams into `outs`, one file per stream.
pub fn extract_stems(bin: &Path, source: &Path, outs: &[PathBuf]) -> Result<(), ToolError> {
    run_tool(bin, &extract_args(source, outs))?;
    Ok(())
}

/// Remux `tracks` into a single multi-track container at `out`.
pub fn remux_tracks(bin: &Path, tracks: &[(PathBuf, &str)], out: &Path) -> Result<(), ToolError> {
    run_tool(bin, &remux_args(tracks, out))?;
    Ok(())
}
