//! Path and filter utilities

use regex::Regex;
use std::path::{Path, PathBuf};

/// Convert absolute path to relative path from base
pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    path.strip_prefix(base).ok().map(|p| p.to_path_buf())
}

/// File name with `suffix` removed, or None when the name doesn't carry it.
/// Matching is case-sensitive, like the exporter's own output.
pub fn strip_name_suffix<'a>(file_name: &'a str, suffix: &str) -> Option<&'a str> {
    file_name.strip_suffix(suffix)
}

/// True when the full path matches the operator filter. No filter accepts
/// everything; the pattern is searched anywhere in the path, not anchored.
pub fn matches_filter(path: &Path, filter: &Option<Regex>) -> bool {
    match filter {
        None => true,
        Some(re) => re.is_match(&path.to_string_lossy()),
    }
}
