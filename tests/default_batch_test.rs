//! Crate-level batch entry point reading its pool size from the environment.
//! Kept in its own test binary since it sets process environment variables.
#![cfg(unix)]

mod common;

use anyhow::Result;

use common::{peak_concurrency, read_log, write_logging_script};

#[test]
fn default_batch_uses_configured_executable_and_workers() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let log = dir.path().join("calls.log");
    let script = write_logging_script(dir.path(), &log)?;

    std::env::set_var("LITEX_PATH", &script);
    std::env::remove_var("LITEX_MAX_WORKERS");

    // Unconfigured: one worker.
    let out = litex_runner::run_batch_default(&["a", "b", "c"])?;
    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|r| r.success));
    assert_eq!(peak_concurrency(&read_log(&log)?), 1);

    std::fs::remove_file(&log)?;
    std::env::set_var("LITEX_MAX_WORKERS", "2");

    let codes = ["slow 1", "slow 2", "x"];
    let out = litex_runner::run_batch_default(&codes)?;
    let payloads: Vec<_> = out.iter().map(|r| r.payload.as_str()).collect();
    assert_eq!(payloads, codes);
    assert_eq!(peak_concurrency(&read_log(&log)?), 2);
    Ok(())
}
