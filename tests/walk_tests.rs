use regex::Regex;
use restem::pipeline::discover;
use restem::utils::config::{Config, Suffixes, ToolBins};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

fn config(source_root: &Path) -> Config {
    Config {
        source_root: source_root.to_path_buf(),
        dest_root: source_root.join("out"),
        checksum_base: "/base".into(),
        input_suffix: Suffixes::INPUT.to_string(),
        output_suffix: Suffixes::OUTPUT.to_string(),
        filter: None,
        jobs: 1,
        dry_run: false,
        verbose: false,
        probe_bin: ToolBins::PROBE.into(),
        mux_bin: ToolBins::MUX.into(),
        tag_bin: ToolBins::TAG.into(),
    }
}

/// root/a.stem.m4a, root/sub/b.stem.m4a, root/sub/c.mp3, root/sub/deep/d.stem.m4a
fn fixture_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("sub/deep")).unwrap();
    fs::write(root.join("a.stem.m4a"), b"a").unwrap();
    fs::write(root.join("sub/b.stem.m4a"), b"b").unwrap();
    fs::write(root.join("sub/c.mp3"), b"c").unwrap();
    fs::write(root.join("sub/deep/d.stem.m4a"), b"d").unwrap();
    dir
}

fn base_names(cfg: &Config) -> BTreeSet<String> {
    discover(cfg).map(|t| t.base_name).collect()
}

#[test]
fn test_discover_matches_suffix_recursively() {
    let tree = fixture_tree();
    let cfg = config(tree.path());
    let names = base_names(&cfg);
    let expected: BTreeSet<String> =
        ["a", "b", "d"].iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_discover_ignores_other_suffixes_and_directories() {
    let tree = fixture_tree();
    let cfg = config(tree.path());
    for t in discover(&cfg) {
        assert!(t.path.is_file());
        assert!(t.path.to_string_lossy().ends_with(".stem.m4a"));
    }
}

#[test]
fn test_discover_sets_dir_and_strips_suffix() {
    let tree = fixture_tree();
    let cfg = config(tree.path());
    let track = discover(&cfg)
        .find(|t| t.base_name == "b")
        .expect("should find sub/b");
    assert_eq!(track.dir, tree.path().join("sub"));
    assert_eq!(track.path, tree.path().join("sub/b.stem.m4a"));
}

#[test]
fn test_discover_applies_regex_filter_to_full_path() {
    let tree = fixture_tree();
    let mut cfg = config(tree.path());
    cfg.filter = Some(Regex::new("sub").unwrap());
    let names = base_names(&cfg);
    let expected: BTreeSet<String> = ["b", "d"].iter().map(|s| s.to_string()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_discover_filter_with_no_matches_yields_nothing() {
    let tree = fixture_tree();
    let mut cfg = config(tree.path());
    cfg.filter = Some(Regex::new("no-such-dir").unwrap());
    assert_eq!(discover(&cfg).count(), 0);
}

#[test]
fn test_discover_is_restartable() {
    let tree = fixture_tree();
    let cfg = config(tree.path());
    // No persisted cursor: a fresh walk sees the same candidates.
    assert_eq!(base_names(&cfg), base_names(&cfg));
}

#[test]
fn test_discover_empty_tree() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path());
    assert_eq!(discover(&cfg).count(), 0);
}
