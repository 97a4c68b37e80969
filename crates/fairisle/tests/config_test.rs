//! # Configuration Loading Tests

use fairisle::{FairIsleConfig, FairIsleError, ImageMode};
use tempfile::TempDir;

/// Test: A missing file falls back to defaults.
#[test]
fn test_missing_file_is_default() {
    let dir = TempDir::new().unwrap();
    let config = FairIsleConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, FairIsleConfig::default());
}

/// Test: A full file round-trips every field.
#[test]
fn test_full_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fairisle.toml");
    std::fs::write(
        &path,
        r#"
[metadata]
name_prefix = "Knit"
description = "Test collection"
base_url = "https://knits.example"
image = "url"

[batch]
workers = 2
output_dir = "renders"
write_metadata = false
"#,
    )
    .unwrap();

    let config = FairIsleConfig::load(&path).unwrap();
    assert_eq!(config.metadata.name_prefix, "Knit");
    assert_eq!(config.metadata.image, ImageMode::Url);
    assert_eq!(config.batch.workers, 2);
    assert_eq!(config.batch.output_dir, std::path::PathBuf::from("renders"));
    assert!(!config.batch.write_metadata);
}

/// Test: Broken TOML is a configuration error, not a panic.
#[test]
fn test_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fairisle.toml");
    std::fs::write(&path, "[metadata\nname_prefix = ").unwrap();

    let err = FairIsleConfig::load(&path).unwrap_err();
    assert!(matches!(err, FairIsleError::Config(_)));
}

/// Test: Unreadable path (a directory) is an I/O error.
#[test]
fn test_directory_instead_of_file() {
    let dir = TempDir::new().unwrap();
    let err = FairIsleConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, FairIsleError::Io { .. }));
}
