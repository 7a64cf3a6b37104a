use restem::pipeline::{
    Resolution, checksum_path, destination_for, ensure_destination_dir, resolve,
};
use restem::types::SourceTrack;
use restem::utils::config::{Config, Suffixes, ToolBins};
use std::path::{Path, PathBuf};

fn config(source_root: &Path, dest_root: &Path, checksum_base: &Path) -> Config {
    Config {
        source_root: source_root.to_path_buf(),
        dest_root: dest_root.to_path_buf(),
        checksum_base: checksum_base.to_path_buf(),
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

fn track(path: &str, base_name: &str) -> SourceTrack {
    let path = PathBuf::from(path);
    SourceTrack {
        dir: path.parent().unwrap().to_path_buf(),
        path,
        base_name: base_name.to_string(),
    }
}

// --- checksum_path (mapping onto the original library layout) ---

#[test]
fn test_checksum_path_at_source_root_is_base() {
    let cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    assert_eq!(checksum_path(Path::new("/src"), &cfg), PathBuf::from("/base"));
}

#[test]
fn test_checksum_path_nested_joins_relative_part() {
    let cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    assert_eq!(
        checksum_path(Path::new("/src/A"), &cfg),
        PathBuf::from("/base/A")
    );
    assert_eq!(
        checksum_path(Path::new("/src/A/deep/er"), &cfg),
        PathBuf::from("/base/A/deep/er")
    );
}

#[test]
fn test_checksum_path_outside_source_root_falls_back_to_base() {
    let cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    assert_eq!(
        checksum_path(Path::new("/elsewhere"), &cfg),
        PathBuf::from("/base")
    );
}

// --- destination_for ---

#[test]
fn test_destination_for_nested_track() {
    let cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    let t = track("/src/A/song.stem.m4a", "song");
    // canonical "/base/A" -> stripped "baseA" -> "aseA", CRC32 61a62975
    assert_eq!(
        destination_for(&t, &cfg),
        PathBuf::from("/dst/User..aseA-61a62975/song.mp3.vdjstems")
    );
}

#[test]
fn test_destination_for_track_at_source_root() {
    let cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    let t = track("/src/song.stem.m4a", "song");
    assert_eq!(
        destination_for(&t, &cfg),
        PathBuf::from("/dst/User..base-64436eb5/song.mp3.vdjstems")
    );
}

#[test]
fn test_destination_respects_configured_output_suffix() {
    let mut cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    cfg.output_suffix = ".mp4.vdjstems".to_string();
    let t = track("/src/A/song.stem.m4a", "song");
    let dest = destination_for(&t, &cfg);
    assert!(dest.to_string_lossy().ends_with("song.mp4.vdjstems"));
}

#[test]
fn test_same_directory_tracks_share_destination_dir() {
    let cfg = config(Path::new("/src"), Path::new("/dst"), Path::new("/base"));
    let a = destination_for(&track("/src/A/one.stem.m4a", "one"), &cfg);
    let b = destination_for(&track("/src/A/two.stem.m4a", "two"), &cfg);
    assert_eq!(a.parent(), b.parent());
    assert_ne!(a, b);
}

// --- resolve (idempotency gate) ---

#[test]
fn test_resolve_is_convert_when_destination_absent() {
    let dest_root = tempfile::tempdir().unwrap();
    let cfg = config(Path::new("/src"), dest_root.path(), Path::new("/base"));
    let t = track("/src/A/song.stem.m4a", "song");
    match resolve(&t, &cfg) {
        Resolution::Convert { dest } => {
            assert!(dest.starts_with(dest_root.path()));
        }
        other => panic!("expected Convert, got {other:?}"),
    }
}

#[test]
fn test_resolve_skips_when_destination_exists() {
    let dest_root = tempfile::tempdir().unwrap();
    let cfg = config(Path::new("/src"), dest_root.path(), Path::new("/base"));
    let t = track("/src/A/song.stem.m4a", "song");

    let dest = destination_for(&t, &cfg);
    std::fs::create_dir_all(dest.parent().unwrap()).unwrap();
    std::fs::write(&dest, b"published earlier").unwrap();

    match resolve(&t, &cfg) {
        Resolution::AlreadyProcessed { dest: skipped } => assert_eq!(skipped, dest),
        other => panic!("expected AlreadyProcessed, got {other:?}"),
    }
}

// --- ensure_destination_dir ---

#[test]
fn test_ensure_destination_dir_creates_once() {
    let dest_root = tempfile::tempdir().unwrap();
    let dest = dest_root.path().join("User..aseA-61a62975/song.mp3.vdjstems");

    assert!(ensure_destination_dir(&dest).unwrap());
    assert!(dest.parent().unwrap().is_dir());
    // Second call is a no-op, not an error.
    assert!(!ensure_destination_dir(&dest).unwrap());
}

#[test]
fn test_ensure_destination_dir_creates_nested_parents() {
    let dest_root = tempfile::tempdir().unwrap();
    let dest = dest_root.path().join("deep/User..xxxx-00000000/song.mp3.vdjstems");
    assert!(ensure_destination_dir(&dest).unwrap());
    assert!(dest.parent().unwrap().is_dir());
}
