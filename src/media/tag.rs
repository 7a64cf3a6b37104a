//! Container tagging (MP4Box collaborator).
//!
//! Writes a per-track `name` entry for each audio track and merges the
//! run-wide metadata sidecar, producing the final publishable container.

use std::ffi::OsString;
use std::path::Path;

use super::{ToolError, run_tool};

/// Arguments tagging `remuxed` into `out`. Track titles are written as udta
/// `name` entries; MP4Box numbers tracks from 1. The sidecar is merged via
/// `-itags`; the brand flags keep the container compatible with the
/// destination player.
pub fn tag_args(remuxed: &Path, sidecar: &Path, titles: &[&str], out: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        let track = i + 1;
        args.push("-udta".into());
        args.push(format!("{track}:type=name").into());
        args.push("-udta".into());
        args.push(format!("{track}:type=name:str={title}").into());
    }
    args.push("-itags".into());
    args.push(sidecar.into());
    args.push("-flat".into());
    args.push("-brand".into());
    args.push("isom:512".into());
    args.push("-rb".into());
    args.push("mp42".into());
    args.push("-ab".into());
    args.push("mp41".into());
    args.push("-out".into());
    args.push(out.into());
    args.push(remuxed.into());
    args
}

/// Tag the remuxed container and write the final file to `out`.
pub fn tag_tracks(
    bin: &Path,
    remuxed: &Path,
    sidecar: &Path,
    titles: &[&str],
    out: &Path,
) -> Result<(), ToolError> {
    run_tool(bin, &tag_args(remuxed, sidecar, titles, out))?;
    Ok(())
}
