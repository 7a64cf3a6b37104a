use restem::engine::{destination_dir_name, destination_key};

// Expected checksums pinned against an independent CRC32 implementation
// (zlib), so the naming stays stable across machines and crate versions.

// --- destination_key ---

#[test]
fn test_key_is_deterministic() {
    let a = destination_key("/music/mp3/House");
    let b = destination_key("/music/mp3/House");
    assert_eq!(a, b);
}

#[test]
fn test_key_strips_all_separators_not_just_last_segment() {
    // "baseA", not "A": every component contributes to the short suffix.
    let (short, _) = destination_key("/base/A");
    assert_eq!(short, "aseA");
}

#[test]
fn test_key_known_values() {
    assert_eq!(
        destination_key("/base/A"),
        ("aseA".to_string(), "61a62975".to_string())
    );
    assert_eq!(
        destination_key("/base"),
        ("base".to_string(), "64436eb5".to_string())
    );
    assert_eq!(
        destination_key("/music/mp3"),
        ("cmp3".to_string(), "1018af6e".to_string())
    );
}

#[test]
fn test_key_checksum_is_of_unstripped_path() {
    // Same characters once separators are gone, different checksums.
    let (short_a, sum_a) = destination_key("ab/");
    let (short_b, sum_b) = destination_key("ab");
    assert_eq!(short_a, short_b);
    assert_eq!(sum_a, "4a4e4c79");
    assert_eq!(sum_b, "9e83486d");
}

#[test]
fn test_key_short_input_keeps_full_stripped_string() {
    let (short, sum) = destination_key("ab");
    assert_eq!(short, "ab");
    assert_eq!(sum.len(), 8);
}

#[test]
fn test_key_separator_only_input() {
    let (short, sum) = destination_key("/");
    assert_eq!(short, "");
    assert_eq!(sum.len(), 8);
}

#[test]
fn test_key_checksum_format_lowercase_hex() {
    for path in ["/music/mp3", "/base/A", "x", "/a/b/c/d/e"] {
        let (_, sum) = destination_key(path);
        assert_eq!(sum.len(), 8, "checksum for {path:?} should be 8 digits");
        assert!(
            sum.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()),
            "checksum for {path:?} should be lowercase hex, got {sum}"
        );
    }
}

#[test]
fn test_key_multibyte_characters_counted_as_chars() {
    // Last 4 characters, not bytes.
    let (short, _) = destination_key("/música");
    assert_eq!(short, "sica");
}

// --- destination_dir_name ---

#[test]
fn test_dir_name_format() {
    assert_eq!(destination_dir_name("/base/A"), "User..aseA-61a62975");
}

#[test]
fn test_dir_names_differ_for_different_paths() {
    let a = destination_dir_name("/music/mp3/House");
    let b = destination_dir_name("/music/mp3/Techno/Detroit");
    assert_ne!(a, b);
}

#[test]
fn test_dir_names_differ_when_only_checksum_differs() {
    // "a/b" and "b/a" share no stripped suffix here, but even paths whose
    // stripped forms collide are told apart by the checksum component.
    let a = destination_dir_name("ab/");
    let b = destination_dir_name("ab");
    assert_ne!(a, b);
}
