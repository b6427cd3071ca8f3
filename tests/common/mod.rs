//! Fake litex executables for integration tests.
#![allow(dead_code)]

use anyhow::Result;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

pub fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, body)?;
    let mut perms = fs::metadata(&path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms)?;
    Ok(path)
}

/// Fake litex that appends `start <snippet>` / `end <snippet>` to `log`.
/// Snippets starting with `slow` sleep 1s, the rest 0.05s.
pub fn write_logging_script(dir: &Path, log: &Path) -> Result<PathBuf> {
    let body = format!(
        r#"#!/bin/sh
log='{log}'
echo "start $2" >> "$log"
case "$2" in
    slow*) sleep 1 ;;
    *) sleep 0.05 ;;
esac
echo "end $2" >> "$log"
printf '%s :)\n' "$2"
"#,
        log = log.display()
    );
    write_script(dir, "litex", &body)
}

pub fn read_log(log: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(log)?.lines().map(str::to_string).collect())
}

/// Highest number of snippets between their `start` and `end` lines at once.
pub fn peak_concurrency(lines: &[String]) -> usize {
    let mut running = 0usize;
    let mut peak = 0;
    for line in lines {
        if line.starts_with("start ") {
            running += 1;
            peak = peak.max(running);
        } else if line.starts_with("end ") {
            running = running.saturating_sub(1);
        }
    }
    peak
}
