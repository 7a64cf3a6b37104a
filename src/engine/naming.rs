//! Deterministic destination naming.
//!
//! The destination player finds converted stems in directories named
//! `User..XXXX-cccccccc`, where `XXXX` is taken from the original library
//! directory's path and `cccccccc` is a CRC32 of that path. The checksum is
//! a naming shim the consumer expects, not content addressing; 32 bits means
//! collisions are possible and accepted.

use crate::utils::config::DirNaming;

/// Derive the naming key for a canonical library path: the last 4 characters
/// of the path with every separator removed (the whole path concatenated,
/// not just the last segment; shorter inputs yield fewer characters), and
/// the CRC32 of the original, unstripped path as 8 lowercase hex digits.
///
/// Pure function of the string's bytes; stable across runs and machines. The
/// path need not exist on disk.
pub fn destination_key(canonical: &str) -> (String, String) {
    let stripped: Vec<char> = canonical
        .chars()
        .filter(|c| !std::path::is_separator(*c))
        .collect();
    let start = stripped.len().saturating_sub(DirNaming::SHORT_SUFFIX_LEN);
    let short_suffix: String = stripped[start..].iter().collect();

    let checksum = format!("{:08x}", crc32fast::hash(canonical.as_bytes()));

    (short_suffix, checksum)
}

/// Destination subdirectory name for a canonical library path.
pub fn destination_dir_name(canonical: &str) -> String {
    let (short_suffix, checksum) = destination_key(canonical);
    format!("{}{}-{}", DirNaming::PREFIX, short_suffix, checksum)
}
