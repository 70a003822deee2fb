//! Thin async client for delegating agent prompts to the Codex CLI.
//!
//! One call = one `codex exec` child process: the agent's system prompt,
//! the user task, and an optional task identifier are composed into a single
//! prompt, the child inherits the caller's environment and working directory,
//! and its trimmed stdout comes back as the response. Failures surface as
//! typed [`CodexError`]s carrying the child's diagnostics.
//!
//! ```no_run
//! use codex_delegate::CodexClient;
//!
//! # async fn run() -> Result<(), codex_delegate::CodexError> {
//! let client = CodexClient::for_tier("haiku");
//! let response = client
//!     .invoke("You are a code reviewer.", "Review src/lib.rs", Some("T-42"))
//!     .await?;
//! println!("{response}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod model;
pub mod prompt;

pub use client::{CodexClient, CodexConfig};
pub use error::{CodexError, UNKNOWN_ERROR};
pub use model::{resolve_model, DEFAULT_MODEL, MODEL_TIERS};
pub use prompt::{compose_prompt, PROMPT_SEPARATOR};
