//! Run Litex snippets through the `litex` executable.
//!
//! Each snippet is passed as `litex -e <snippet>`. A run counts as a success
//! when litex exits with status zero and its stdout, minus trailing
//! whitespace, ends with `:)`. Every failure that concerns a single snippet
//! is reported inside its [`ExecutionResult`]; only a batch whose worker
//! pool cannot be built returns an error.
//!
//! ```no_run
//! let r = litex_runner::run("1 = 1");
//! println!("{} {}", r.success, r.message);
//!
//! let all = litex_runner::run_batch(&["1 = 1", "2 = 2"], 2)?;
//! assert_eq!(all.len(), 2);
//! # Ok::<(), litex_runner::BatchError>(())
//! ```

pub mod batch;
pub mod config;
pub mod execution;

pub use batch::BatchError;
pub use config::Config;
pub use execution::{is_success, ExecutionResult, Executor};

/// Run one snippet with the executable from [`Config::load`].
pub fn run(code: &str) -> ExecutionResult {
    Executor::from_config(&Config::load()).run_blocking(code)
}

/// Run `codes` on a pool sized by `LITEX_MAX_WORKERS` (1 unless configured).
pub fn run_batch_default<S>(codes: &[S]) -> Result<Vec<ExecutionResult>, BatchError>
where
    S: AsRef<str>,
{
    let cfg = Config::load();
    batch::run_batch_blocking(&Executor::from_config(&cfg), codes, cfg.max_workers())
}

/// Run `codes` on a pool of `max_workers` workers, returning one result per
/// snippet in input order. Must not be called from inside a tokio runtime.
pub fn run_batch<S>(codes: &[S], max_workers: usize) -> Result<Vec<ExecutionResult>, BatchError>
where
    S: AsRef<str>,
{
    let exec = Executor::from_config(&Config::load());
    batch::run_batch_blocking(&exec, codes, max_workers)
}
