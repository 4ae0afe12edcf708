//! Test utilities for integration tests.
//!
//! Paths to the fixture files under `tests/data/` and helpers for writing
//! temporary metadata files.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Tolerance for voxel size comparisons, in micrometres.
pub const VOX_DIM_TOLERANCE: f64 = 0.1;

/// Directory holding all fixture files.
pub fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

/// Path to a metadata fixture.
pub fn metadata_fixture(name: &str) -> PathBuf {
    data_dir().join("metadata").join(name)
}

pub fn cellfinder_metadata() -> PathBuf {
    metadata_fixture("cellfinder_metadata.ini")
}

pub fn baking_tray_metadata() -> PathBuf {
    metadata_fixture("BakingTray_recipe.yml")
}

pub fn mesospim_metadata() -> PathBuf {
    metadata_fixture("mesoSPIM.raw_meta.txt")
}

pub fn unsupported_metadata() -> PathBuf {
    metadata_fixture("unsupported_metadata.txt")
}

pub fn jabberwocky() -> PathBuf {
    data_dir().join("general").join("jabberwocky.txt")
}

/// Assert two voxel sizes agree within [`VOX_DIM_TOLERANCE`].
pub fn assert_close(expected: f64, actual: f64) {
    assert!(
        (expected - actual).abs() <= VOX_DIM_TOLERANCE,
        "expected {} (+/- {}), got {}",
        expected,
        VOX_DIM_TOLERANCE,
        actual
    );
}

/// Write `contents` to `name` inside a fresh temporary directory.
///
/// The directory is removed when the returned guard is dropped.
pub fn temp_metadata(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write temp file");
    (dir, path)
}
