//! Error taxonomy for Codex invocations.
//!
//! Every call to [`crate::client::CodexClient::invoke`] terminates in exactly
//! one success or exactly one of these kinds. Nothing is retried and no
//! diagnostic is swallowed; callers surface the Display text verbatim.

use std::time::Duration;

/// Substituted for the diagnostic when a failing process produced no stderr.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum CodexError {
    /// The `codex` binary is missing from the search path. One-time setup is
    /// required before first use; the message carries the remediation step.
    #[error("Codex CLI not found. Install and authenticate with: codex login")]
    BinaryNotFound,

    /// The process ran and exited non-zero (carries its stderr, or
    /// [`UNKNOWN_ERROR`] when stderr was empty), or launch/communication
    /// failed unexpectedly (carries the fault's description).
    #[error("Codex invocation failed: {0}")]
    Invocation(String),

    /// The configured deadline elapsed before the process finished. The
    /// child was killed; no partial output is returned.
    #[error("Codex invocation timed out after {0:?}")]
    TimedOut(Duration),
}
