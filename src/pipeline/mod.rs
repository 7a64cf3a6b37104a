//! Pipeline components: discovery, resolution, conversion, batch driver.

pub mod context;
pub mod convert;
pub mod orchestrator;
pub mod report;
pub mod resolve;
pub mod sidecar;
pub mod walk;

pub use context::{BatchChannels, BatchContext, create_batch_channels};
pub use convert::{Workspace, convert_track};
pub use orchestrator::run_batch;
pub use report::print_summary;
pub use resolve::{
    Resolution, checksum_path, destination_for, ensure_destination_dir, resolve,
};
pub use sidecar::Sidecar;
pub use walk::discover;

/// Track channel capacity: bounded so the walk never runs far ahead of the
/// (much slower) conversion workers.
pub const TRACK_CHANNEL_CAP: usize = 64;
