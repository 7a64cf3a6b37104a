use clap::Parser;
use std::path::PathBuf;

/// Convert a tree of stem exports into multi-track VirtualDJ containers.
#[derive(Clone, Parser)]
#[command(name = "restem")]
#[command(about = "Convert .stem.m4a exports into .mp3.vdjstems files; use --dry-run to preview.")]
pub struct Cli {
    /// Directory tree containing the exported stem files.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Destination root for the converted containers.
    #[arg(value_name = "DEST")]
    pub dest: PathBuf,

    /// Base directory of the original (pre-stem) library, used only for
    /// destination naming. Required here or in `.restem.toml`.
    #[arg(long, short = 'b')]
    pub base_dir: Option<PathBuf>,

    /// Only convert files whose full path matches this regex.
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Number of conversion workers. Default: 1 (sequential).
    #[arg(long, short = 'j')]
    pub jobs: Option<usize>,

    /// Resolve and report what would be converted; create nothing, run no tool.
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Input suffix to match. Default: `.stem.m4a`.
    #[arg(long)]
    pub input_suffix: Option<String>,

    /// Output suffix to write. Default: `.mp3.vdjstems`.
    #[arg(long)]
    pub output_suffix: Option<String>,

    /// Duration probe tool. Default: `ffprobe`.
    #[arg(long)]
    pub probe_bin: Option<PathBuf>,

    /// Mux/filter tool. Default: `ffmpeg`.
    #[arg(long)]
    pub mux_bin: Option<PathBuf>,

    /// Container tagging tool. Default: `MP4Box`.
    #[arg(long)]
    pub tag_bin: Option<PathBuf>,
}
