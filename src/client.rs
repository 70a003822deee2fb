//! Codex invocation client — spawns the `codex` CLI once per call.
//!
//! The `codex` binary is expected to be on `PATH`. Spawned with:
//!   `codex exec -m <model> --sandbox workspace-write "<prompt>"`
//!
//! Each invocation is one linear request/response exchange: compose the
//! prompt, spawn the child, drain stdout/stderr, translate the exit status.
//! No process is pooled or retained, and concurrent invocations share no
//! state beyond the read-only model table.

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::error::{CodexError, UNKNOWN_ERROR};
use crate::model::{resolve_model, DEFAULT_MODEL};
use crate::prompt::compose_prompt;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Per-client invocation settings.
///
/// The defaults reproduce the production contract: `codex` looked up on
/// `PATH`, the frontier model, full inheritance of the parent's environment
/// and working directory (that inheritance is how Codex discovers its MCP
/// server configuration and project root), and an unbounded wait.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodexConfig {
    /// Name or path of the Codex CLI executable.
    pub binary: String,

    /// Model passed via `-m` on every invocation.
    pub model: String,

    /// Child working directory. `None` inherits the caller's.
    pub working_dir: Option<PathBuf>,

    /// Child environment. `None` inherits the caller's environment in full;
    /// `Some` replaces it entirely with the given variables.
    pub env: Option<BTreeMap<String, String>>,

    /// Deadline for the whole invocation. `None` waits indefinitely; on
    /// expiry the child is killed and the call fails with
    /// [`CodexError::TimedOut`].
    pub timeout: Option<Duration>,
}

impl Default for CodexConfig {
    fn default() -> Self {
        Self {
            binary: "codex".to_string(),
            model: DEFAULT_MODEL.to_string(),
            working_dir: None,
            env: None,
            timeout: None,
        }
    }
}

impl CodexConfig {
    /// Sets the Codex binary name or path.
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Sets the model identifier passed via `-m`.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the child's working directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Replaces the child's environment with exactly `vars`.
    #[must_use]
    pub fn with_env(mut self, vars: BTreeMap<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Bounds the invocation to `timeout`.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Client for delegating agent prompts to the Codex CLI.
#[derive(Debug, Clone)]
pub struct CodexClient {
    config: CodexConfig,
}

impl Default for CodexClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CodexClient {
    /// Client with the default configuration (see [`CodexConfig`]).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: CodexConfig::default(),
        }
    }

    /// Client with an explicit configuration.
    #[must_use]
    pub fn with_config(config: CodexConfig) -> Self {
        Self { config }
    }

    /// Client whose model is resolved from an agent capability tier
    /// ("haiku", "sonnet", "opus"); unknown tiers use the default model.
    #[must_use]
    pub fn for_tier(tier: &str) -> Self {
        Self::with_config(CodexConfig::default().with_model(resolve_model(tier)))
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &CodexConfig {
        &self.config
    }

    /// Invoke Codex with an agent system prompt and a user task, returning
    /// the trimmed response text.
    ///
    /// The composed prompt is passed verbatim as a single trailing argument;
    /// stdout and stderr are drained concurrently while waiting, so a chatty
    /// child cannot deadlock on a full pipe. Errors are never swallowed:
    /// every call resolves to the response text or one [`CodexError`] kind.
    pub async fn invoke(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        task_id: Option<&str>,
    ) -> Result<String, CodexError> {
        let prompt = compose_prompt(system_prompt, user_prompt, task_id);

        info!(model = %self.config.model, "invoking codex");
        debug!(
            system_prompt_len = system_prompt.len(),
            prompt_len = prompt.len(),
            "composed prompt"
        );

        let mut cmd = Command::new(&self.config.binary);
        cmd.arg("exec")
            .arg("-m")
            .arg(&self.config.model)
            // Required sandbox declaration: write access to the working
            // directory and nothing broader.
            .args(["--sandbox", "workspace-write"])
            .arg(&prompt)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }
        if let Some(vars) = &self.config.env {
            cmd.env_clear();
            cmd.envs(vars);
        }

        let child = cmd.spawn().map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CodexError::BinaryNotFound,
            _ => CodexError::Invocation(e.to_string()),
        })?;

        // wait_with_output drains both pipes concurrently. On timeout the
        // dropped future releases the child, which kill_on_drop reaps.
        let output = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    warn!(timeout = ?limit, "codex invocation timed out; child killed");
                    CodexError::TimedOut(limit)
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| CodexError::Invocation(e.to_string()))?;

        if !output.status.success() {
            let diagnostic = if output.stderr.is_empty() {
                UNKNOWN_ERROR.to_string()
            } else {
                String::from_utf8_lossy(&output.stderr).into_owned()
            };
            warn!(exit_code = ?output.status.code(), "codex exited non-zero");
            return Err(CodexError::Invocation(diagnostic));
        }

        let response = String::from_utf8_lossy(&output.stdout).trim().to_string();
        debug!(response_len = response.len(), "codex response received");

        Ok(response)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
