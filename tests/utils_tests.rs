use anyhow::Result;
use dataset_checksums::utils::{
    Algorithm, FileFilter, compute_bytes_hash, compute_file_hash, format_size, is_hidden,
    relative_display,
};
use proptest::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_file(root: &Path, relative: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, contents).unwrap();
    path
}

fn unit(formatted: &str) -> &str {
    formatted.rsplit(' ').next().unwrap()
}

fn unit_rank(formatted: &str) -> usize {
    match unit(formatted) {
        "B" => 0,
        "kiB" => 1,
        "MiB" => 2,
        other => panic!("unexpected unit {other}"),
    }
}

#[test]
fn format_size_known_values() {
    assert_eq!(format_size(0), "0 B");
    assert_eq!(format_size(1), "1.0 B");
    assert_eq!(format_size(10), "10.0 B");
    assert_eq!(format_size(1023), "1023.0 B");
    assert_eq!(format_size(1024), "1.0 kiB");
    assert_eq!(format_size(1536), "1.5 kiB");
    assert_eq!(format_size(4096), "4.0 kiB");
    assert_eq!(format_size(1024 * 1024), "1.0 MiB");
    assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MiB");
    assert_eq!(format_size(2 * 1024 * 1024 * 1024), "2048.0 MiB");
}

proptest! {
    #[test]
    fn format_size_picks_unit_by_range(n in 1u64..u64::MAX) {
        let formatted = format_size(n);
        let expected = if n < 1024 {
            "B"
        } else if n < 1024 * 1024 {
            "kiB"
        } else {
            "MiB"
        };
        prop_assert_eq!(unit(&formatted), expected);
    }

    #[test]
    fn format_size_unit_is_monotonic(a in any::<u64>(), b in any::<u64>()) {
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(unit_rank(&format_size(small)) <= unit_rank(&format_size(large)));
    }
}

#[test]
fn compute_file_hash_matches_expected_values() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_file(dir.path(), "hash.txt", b"hello world");

    assert_eq!(
        compute_file_hash(&file, Algorithm::Sha256)?,
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
    assert_eq!(
        compute_file_hash(&file, Algorithm::Md5)?,
        "5eb63bbbe01eeed093cb22bb8f5acdc3"
    );
    Ok(())
}

#[test]
fn compute_file_hash_is_deterministic_and_content_sensitive() -> Result<()> {
    let dir = TempDir::new()?;
    let file = write_file(dir.path(), "a/data.nc", &[7u8; 20_000]);

    for algorithm in [Algorithm::Md5, Algorithm::Sha256] {
        let first = compute_file_hash(&file, algorithm)?;
        let second = compute_file_hash(&file, algorithm)?;
        assert_eq!(first, second);
        assert_eq!(first, compute_bytes_hash(&[7u8; 20_000], algorithm));

        let mut changed = vec![7u8; 20_000];
        changed[12_345] = 8;
        fs::write(&file, &changed)?;
        assert_ne!(compute_file_hash(&file, algorithm)?, first);
        fs::write(&file, [7u8; 20_000])?;
    }
    Ok(())
}

#[test]
fn compute_file_hash_fails_for_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("gone.nc");

    assert!(compute_file_hash(&missing, Algorithm::Sha256).is_err());
}

#[test]
fn filter_accepts_nested_regular_file() -> Result<()> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "data/a/x.nc", b"x");

    let filter = FileFilter::default();
    assert!(filter.accepts(dir.path(), Path::new("data/a/x.nc")));
    Ok(())
}

#[test]
fn filter_rejects_top_level_hidden_and_directories() -> Result<()> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "README.md", b"# readme");
    write_file(dir.path(), ".git/config", b"[core]");
    write_file(dir.path(), "data/.cache/x.nc", b"x");
    write_file(dir.path(), "data/.x.nc", b"x");
    fs::create_dir_all(dir.path().join("data/empty"))?;

    let filter = FileFilter::default();
    assert!(!filter.accepts(dir.path(), Path::new("README.md")));
    assert!(!filter.accepts(dir.path(), Path::new(".git/config")));
    assert!(!filter.accepts(dir.path(), Path::new("data/.cache/x.nc")));
    assert!(!filter.accepts(dir.path(), Path::new("data/.x.nc")));
    assert!(!filter.accepts(dir.path(), Path::new("data/empty")));
    assert!(!filter.accepts(dir.path(), Path::new("data/missing.nc")));
    Ok(())
}

#[test]
fn filter_rejects_excluded_artifacts() -> Result<()> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "data/registry.txt", b"old");
    write_file(dir.path(), "data/a/x.nc", b"x");
    write_file(dir.path(), "data/a/x.nc.md5", b"stale");
    write_file(dir.path(), "data/a/notes.TXT", b"notes");

    let sidecars = FileFilter {
        exclude_extensions: vec!["md5".to_string()],
        ..FileFilter::default()
    };
    assert!(!sidecars.accepts(dir.path(), Path::new("data/a/x.nc.md5")));
    assert!(sidecars.accepts(dir.path(), Path::new("data/a/x.nc")));

    let registry = FileFilter {
        include_extensions: vec!["nc".to_string(), ".zip".to_string()],
        exclude_files: vec![PathBuf::from("data/registry.txt")],
        ..FileFilter::default()
    };
    assert!(!registry.accepts(dir.path(), Path::new("data/registry.txt")));
    assert!(!registry.accepts(dir.path(), Path::new("data/a/notes.TXT")));
    assert!(registry.accepts(dir.path(), Path::new("data/a/x.nc")));
    Ok(())
}

#[test]
fn scan_returns_only_accepted_files() -> Result<()> {
    let dir = TempDir::new()?;
    write_file(dir.path(), "top.nc", b"top");
    write_file(dir.path(), "data/a/x.nc", b"x");
    write_file(dir.path(), "data/b/y.zip", b"y");
    write_file(dir.path(), "data/.hidden/z.nc", b"z");

    let filter = FileFilter::default();
    let mut files = filter.scan(dir.path(), Path::new(""))?;
    files.sort();

    assert_eq!(
        files,
        vec![PathBuf::from("data/a/x.nc"), PathBuf::from("data/b/y.zip")]
    );
    Ok(())
}

#[test]
fn hidden_and_display_helpers() {
    assert!(is_hidden(Path::new("a/.b/c")));
    assert!(!is_hidden(Path::new("a/b.c/d")));
    assert_eq!(
        relative_display(Path::new("data/a/x.nc"), Path::new("data")),
        "a/x.nc"
    );
    assert_eq!(
        relative_display(Path::new("data/a/x.nc"), Path::new("")),
        "data/a/x.nc"
    );
}
