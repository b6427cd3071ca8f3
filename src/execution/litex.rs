//! Invocation of the litex executable (`litex -e <snippet>`).

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use futures::stream::{self, StreamExt};
use tokio::process::Command;

use super::{classify, ExecutionResult};
use crate::batch::BatchError;
use crate::config::Config;

/// Flag that makes litex evaluate its next argument as source text.
pub const EVAL_FLAG: &str = "-e";

pub const DEFAULT_PROGRAM: &str = "litex";

#[derive(Debug, Clone)]
pub struct Executor {
    program: OsString,
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Executor {
    /// `program` is either a bare name looked up on `PATH` or a path.
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.litex_path())
    }

    pub fn program(&self) -> PathBuf {
        PathBuf::from(&self.program)
    }

    /// Run one snippet, blocking the current thread until litex exits.
    pub fn run_blocking(&self, code: &str) -> ExecutionResult {
        tracing::debug!(program = ?self.program, len = code.len(), "running snippet");
        let outcome = std::process::Command::new(&self.program)
            .arg(EVAL_FLAG)
            .arg(code)
            .stdin(Stdio::null())
            .output();
        classify(code, outcome)
    }

    /// Run one snippet on the tokio runtime.
    pub async fn run(&self, code: &str) -> ExecutionResult {
        tracing::debug!(program = ?self.program, len = code.len(), "running snippet");
        let outcome = Command::new(&self.program)
            .arg(EVAL_FLAG)
            .arg(code)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await;
        classify(code, outcome)
    }

    /// Run every snippet with at most `max_workers` litex processes alive at
    /// once. Results come back in input order.
    pub async fn run_batch<S>(
        &self,
        codes: &[S],
        max_workers: usize,
    ) -> Result<Vec<ExecutionResult>, BatchError>
    where
        S: AsRef<str>,
    {
        if max_workers == 0 {
            return Err(BatchError::NoWorkers);
        }
        tracing::info!(snippets = codes.len(), max_workers, "starting batch");

        let tasks = codes.iter().enumerate().map(|(idx, code)| {
            let exec = self.clone();
            let code = code.as_ref().to_string();
            let handle = tokio::spawn(async move { exec.run(&code).await });
            async move { (idx, handle.await) }
        });

        // A slot frees up as soon as its snippet finishes, whatever its
        // position; results are put back in input order afterwards.
        let mut slots: Vec<Option<ExecutionResult>> = vec![None; codes.len()];
        let mut done = stream::iter(tasks).buffer_unordered(max_workers);
        while let Some((idx, joined)) = done.next().await {
            slots[idx] = Some(joined?);
        }

        let results: Vec<ExecutionResult> = slots.into_iter().flatten().collect();
        let failed = results.iter().filter(|r| !r.success).count();
        tracing::info!(snippets = results.len(), failed, "batch finished");
        Ok(results)
    }
}
