pub mod config;
pub mod logger;
pub mod restem_toml;

pub use config::*;
pub use logger::setup_logging;
pub use restem_toml::{Overlay, load_restem_toml};
