//! Shared test utilities for integration tests.
//!
//! This module provides common helper functions used across multiple test
//! files: temp tree builders and a buffer-backed sweep runner.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use fsweep::{Action, Config, FileFilter, RunSummary};

/// Creates a temp tree holding `count` dummy files per extension.
///
/// For `(".log", 3)` the tree gains `file1.log`, `file2.log` and `file3.log`,
/// each holding the 5-byte payload `dummy`.
pub fn populate(files: &[(&str, usize)]) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    for (ext, count) in files {
        for i in 1..=*count {
            let name = format!("file{}{}", i, ext);
            fs::write(dir.path().join(name), b"dummy").expect("Failed to write dummy file");
        }
    }
    dir
}

/// Writes a file under `root` at the relative path `rel`, creating parent
/// directories as needed. Returns the full path.
pub fn write_file(root: &Path, rel: &str, contents: &[u8]) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dirs");
    }
    fs::write(&path, contents).expect("Failed to write file");
    path
}

/// Runs one sweep with in-memory sinks.
///
/// Returns `(primary output, audit output, summary)` on success so tests can
/// assert on both sinks byte-for-byte.
pub fn sweep(
    root: &Path,
    filter: FileFilter,
    action: Action,
) -> fsweep::Result<(String, String, RunSummary)> {
    let mut out = Vec::new();
    let mut audit = Vec::new();
    let summary = fsweep::run(
        root,
        Config {
            filter,
            action,
            out: &mut out,
            audit: &mut audit,
        },
    )?;
    Ok((
        String::from_utf8(out).expect("Primary output should be UTF-8"),
        String::from_utf8(audit).expect("Audit output should be UTF-8"),
        summary,
    ))
}

/// Counts files under `dir` (recursively) whose name ends with `suffix`.
pub fn count_files_with_suffix(dir: &Path, suffix: &str) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(suffix))
        .count()
}

/// Decodes a gzip file, returning its payload and the header name field.
pub fn decode_gz(path: &Path) -> (Vec<u8>, Option<String>) {
    let file = fs::File::open(path).expect("Failed to open gz file");
    let mut decoder = flate2::read::GzDecoder::new(file);
    let mut data = Vec::new();
    decoder
        .read_to_end(&mut data)
        .expect("Failed to decode gz file");
    let name = decoder
        .header()
        .and_then(|h| h.filename())
        .map(|bytes| String::from_utf8_lossy(bytes).into_owned());
    (data, name)
}
