//! Unified error types for the gamebox workspace.
//!
//! Every failure is terminal for the current invocation — nothing is
//! retried. Each variant carries the diagnostic text of the external
//! runtime (or the underlying I/O error) so the CLI can surface a
//! human-readable message without a stack trace.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type shared across the workspace.
#[derive(Debug, Error)]
pub enum GameboxError {
    /// The external container runtime did not respond to the probe.
    #[error("container runtime is unavailable: {detail}")]
    RuntimeUnavailable {
        /// Diagnostic text from the failed probe.
        detail: String,
    },

    /// The image build was rejected by the runtime.
    #[error("image build failed: {detail}")]
    BuildFailed {
        /// Diagnostic text from the failed build.
        detail: String,
    },

    /// No image identifier could be recovered from the build output.
    #[error("no image identifier found in build output: {output}")]
    ImageIdNotFound {
        /// The diagnostic output that was searched.
        output: String,
    },

    /// The container could not be started.
    #[error("failed to start the container: {detail}")]
    StartFailed {
        /// Diagnostic text from the failed run.
        detail: String,
    },

    /// The container could not be stopped.
    #[error("failed to stop the container: {detail}")]
    StopFailed {
        /// Diagnostic text from the failed kill.
        detail: String,
    },

    /// Reading, writing, or removing the lockfile failed.
    #[error("lockfile error at {path}: {source}")]
    Lockfile {
        /// Path of the lockfile.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An I/O operation outside the lockfile failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An external runtime call exceeded its deadline.
    #[error("runtime {operation} did not finish within {seconds}s")]
    Timeout {
        /// Name of the runtime operation that timed out.
        operation: &'static str,
        /// Deadline that was exceeded, in seconds.
        seconds: u64,
    },
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, GameboxError>;
