//! Snippet input helpers (files and stdin).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Read one snippet per file, in the order given.
pub fn read_snippet_files(file_paths: &[String]) -> Result<Vec<String>> {
    file_paths.iter().map(|p| read_snippet_file(p)).collect()
}

/// Read a whole file as a single snippet.
pub fn read_snippet_file(file_path: &str) -> Result<String> {
    let path = Path::new(file_path);

    if !path.exists() {
        bail!("Snippet file '{}' does not exist", file_path);
    }
    if !path.is_file() {
        bail!("'{}' is not a file", file_path);
    }

    fs::read_to_string(path).with_context(|| format!("Failed to read file '{}'", file_path))
}

/// Drain stdin into one snippet.
pub fn read_stdin_snippet() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read snippet from stdin")?;
    Ok(buf)
}
