//! Execution engine: result type and outcome classification.

use std::io;
use std::process::Output;
use std::string::FromUtf8Error;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod litex;

pub use litex::Executor;

/// Trailing characters litex prints when a snippet checks out.
pub const SUCCESS_MARKER: &str = ":)";

pub const NOT_FOUND_MESSAGE: &str =
    "Litex command not found. Please ensure Litex is installed and in your PATH.";

/// Outcome of running one snippet. Field names match the dict keys of the
/// Python binding so JSON output is interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub success: bool,
    pub payload: String,
    pub message: String,
}

impl ExecutionResult {
    /// Result for a process that exited with status zero.
    pub fn completed(code: &str, stdout: String) -> Self {
        Self {
            success: is_success(&stdout),
            payload: code.to_string(),
            message: stdout,
        }
    }

    pub fn failure(code: &str, err: InvocationError) -> Self {
        Self {
            success: false,
            payload: code.to_string(),
            message: err.into_message(),
        }
    }
}

/// Ways an invocation can fail before a usable stdout exists.
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("litex exited with {status}")]
    ProcessFailed { status: String, stderr: String },

    #[error("{}", NOT_FOUND_MESSAGE)]
    NotFound,

    #[error("litex output is not valid UTF-8: {0}")]
    Decode(#[from] FromUtf8Error),

    #[error(transparent)]
    Other(#[from] io::Error),
}

impl InvocationError {
    /// Text surfaced to the caller: stderr for a failed process, the error
    /// description otherwise.
    pub fn into_message(self) -> String {
        match self {
            InvocationError::ProcessFailed { stderr, .. } => stderr,
            other => other.to_string(),
        }
    }

    fn from_spawn(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            InvocationError::NotFound
        } else {
            InvocationError::Other(err)
        }
    }
}

/// True when stdout, minus trailing whitespace, ends with the marker.
pub fn is_success(stdout: &str) -> bool {
    stdout.trim_end().ends_with(SUCCESS_MARKER)
}

/// Decode captured output as text: strict UTF-8, with `\r\n` and lone `\r`
/// translated to `\n`.
pub fn decode_text(bytes: Vec<u8>) -> Result<String, FromUtf8Error> {
    let text = String::from_utf8(bytes)?;
    if !text.contains('\r') {
        return Ok(text);
    }
    Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
}

/// Map the raw outcome of `<litex> -e <code>` to a result. Shared by the
/// blocking and async invocation paths.
///
/// Both streams are decoded before the exit status is looked at, so output
/// that is not valid UTF-8 fails the snippet whatever the status.
pub fn classify(code: &str, outcome: io::Result<Output>) -> ExecutionResult {
    let output = match outcome {
        Ok(o) => o,
        Err(e) => {
            let err = InvocationError::from_spawn(e);
            tracing::warn!(error = %err, "litex invocation failed");
            return ExecutionResult::failure(code, err);
        }
    };

    let decoded = decode_text(output.stdout)
        .and_then(|stdout| Ok((stdout, decode_text(output.stderr)?)));
    let (stdout, stderr) = match decoded {
        Ok(streams) => streams,
        Err(e) => {
            let err = InvocationError::Decode(e);
            tracing::warn!(error = %err, "litex output could not be decoded");
            return ExecutionResult::failure(code, err);
        }
    };

    if !output.status.success() {
        let err = InvocationError::ProcessFailed {
            status: output.status.to_string(),
            stderr,
        };
        tracing::debug!(error = %err, "litex reported an error");
        return ExecutionResult::failure(code, err);
    }

    ExecutionResult::completed(code, stdout)
}
