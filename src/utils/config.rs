//! Runtime configuration and the fixed container contracts.
//! Every knob of a run lives in [`Config`]; format constants in one place.

use regex::Regex;
use std::path::PathBuf;

/// All settings for one batch run. The CLI (merged with an optional
/// `.restem.toml` in the source root) fills this in and hands it to the
/// batch driver; nothing reads process-wide state.
#[derive(Clone, Debug)]
pub struct Config {
    /// Root of the tree containing exported stem files.
    pub source_root: PathBuf,
    /// Root of the destination tree of `User..XXXX-cccccccc` directories.
    pub dest_root: PathBuf,
    /// Base directory of the original (pre-stem) library. Only an input to
    /// destination naming; it need not exist on disk.
    pub checksum_base: PathBuf,
    /// Suffix the stem exporter writes (see [`Suffixes::INPUT`]).
    pub input_suffix: String,
    /// Suffix the destination player expects (see [`Suffixes::OUTPUT`]).
    pub output_suffix: String,
    /// Only paths matching this pattern are converted. None = convert all.
    pub filter: Option<Regex>,
    /// Conversion workers. 1 = strictly sequential.
    pub jobs: usize,
    /// Resolve and report only; create nothing, invoke no tool.
    pub dry_run: bool,
    pub verbose: bool,
    /// Duration probe tool (ffprobe-compatible interface).
    pub probe_bin: PathBuf,
    /// Mux/filter tool (ffmpeg-compatible interface).
    pub mux_bin: PathBuf,
    /// Container tagging tool (MP4Box-compatible interface).
    pub tag_bin: PathBuf,
}

// ---- Suffixes ----

/// Default file suffixes of the source exporter and the destination player.
pub struct Suffixes;

impl Suffixes {
    /// Suffix of Traktor-style stem exports.
    pub const INPUT: &'static str = ".stem.m4a";
    /// VirtualDJ suffix for stems backed by an mp3 original. Other original
    /// formats would use other suffixes (e.g. `.mp4.vdjstems`); configure
    /// `output_suffix` for those libraries.
    pub const OUTPUT: &'static str = ".mp3.vdjstems";
}

// ---- Tool binaries ----

/// Default names of the external collaborators, resolved via PATH.
pub struct ToolBins;

impl ToolBins {
    pub const PROBE: &'static str = "ffprobe";
    pub const MUX: &'static str = "ffmpeg";
    pub const TAG: &'static str = "MP4Box";
}

// ---- Destination naming ----

/// Destination directory naming scheme. The format is a compatibility
/// contract with the destination player's library layout; it is not ours to
/// change.
pub struct DirNaming;

impl DirNaming {
    pub const PREFIX: &'static str = "User..";
    /// Characters of the separator-stripped canonical path kept in the name.
    pub const SHORT_SUFFIX_LEN: usize = 4;
}

// ---- Output track layout ----

/// Where one output track's audio comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackSource {
    /// Extracted source sub-stream, by index. The exporter's stream order is
    /// fixed: 0 = full mix, 1 = kick, 2 = bass, 3 = instruments, 4 = vocal.
    Stem(usize),
    /// The synthesized silent placeholder (the source has no hihat stem).
    Silence,
}

/// The 6-track output layout, in final track order. The remux input list,
/// `-map` list, disposition clearing, per-stream titles, and the tag stage
/// all iterate this one table, so the count and order cannot diverge.
pub struct TrackLayout;

impl TrackLayout {
    pub const TRACKS: [(TrackSource, &'static str); 6] = [
        (TrackSource::Stem(0), "mixed track"),
        (TrackSource::Stem(4), "vocal"),
        (TrackSource::Silence, "hihat"),
        (TrackSource::Stem(2), "bass"),
        (TrackSource::Stem(3), "instruments"),
        (TrackSource::Stem(1), "kick"),
    ];
    /// Audio sub-streams demuxed from the source container (indices 0..5).
    pub const SOURCE_STREAMS: usize = 5;
    pub const TRACK_COUNT: usize = Self::TRACKS.len();

    /// Titles in final track order.
    pub fn titles() -> [&'static str; Self::TRACK_COUNT] {
        Self::TRACKS.map(|(_, title)| title)
    }
}

// ---- Sidecar ----

/// Container metadata merged into every output by the tag stage.
pub struct SidecarFields;

impl SidecarFields {
    pub const TOOL: &'static str = "VirtualDJ 2023.7544";
    pub const CREATED: &'static str = "0";
    pub const RATE: &'static str = "0";
}
