// Shared test helpers for creating input files and reading converted output.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::path::PathBuf;

use tempfile::TempDir;

/// Header row used by every fixture.
#[allow(dead_code)] // Used by other test files
pub const HEADER: &str = "Date,Distance,Reading\n";

/// Writes `contents` to `input.csv` in a fresh temp dir.
/// Returns the dir (keep it alive for the test), the input path, and an output path.
pub fn write_input(contents: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let input = dir.path().join("input.csv");
    let output = dir.path().join("output_converted.csv");
    std::fs::write(&input, contents).expect("Failed to write input file");
    (dir, input, output)
}

/// Reads the converted output as UTF-8.
#[allow(dead_code)] // Used by other test files
pub fn read_output(path: &PathBuf) -> String {
    std::fs::read_to_string(path).expect("Failed to read output file")
}
