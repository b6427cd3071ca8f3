//! Batch execution over a fixed-size worker pool.

use std::io;

use thiserror::Error;

use crate::execution::{ExecutionResult, Executor};

/// Failures that abort a whole batch. Per-snippet failures never land here;
/// they are reported inside the snippet's `ExecutionResult`.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("worker pool needs at least one worker")]
    NoWorkers,

    #[error("failed to start worker pool: {0}")]
    Pool(#[source] io::Error),

    #[error("worker task did not finish: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// Build a dedicated runtime with `max_workers` threads and run the batch
/// on it, blocking until every snippet has a result.
///
/// Must not be called from inside a tokio runtime; use
/// [`Executor::run_batch`] there.
pub fn run_batch_blocking<S>(
    exec: &Executor,
    codes: &[S],
    max_workers: usize,
) -> Result<Vec<ExecutionResult>, BatchError>
where
    S: AsRef<str>,
{
    if max_workers == 0 {
        return Err(BatchError::NoWorkers);
    }
    let pool = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(max_workers)
        .thread_name("litex-worker")
        .enable_all()
        .build()
        .map_err(BatchError::Pool)?;

    pool.block_on(exec.run_batch(codes, max_workers))
}
